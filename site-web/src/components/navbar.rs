//! Navigation Bar Component
//!
//! Fixed header with section links, a hover indicator shared by all links,
//! the language toggle and a mobile menu sliding in from the inline-end edge.

use crate::state::{use_i18n, use_motion};
use crate::utils::constants::{NAVBAR_SCROLLED_AT, NAV_ITEMS};
use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use lib_i18n::{translate_toward_end, Direction};
use lib_motion::{NavIndicator, Rect};
use wasm_bindgen::JsCast;

fn rect_of(element: &web_sys::Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

/// Pointer transitions of a single nav item.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Hover {
    Enter { index: usize, container: Rect, item: Rect },
    /// Pointer left the item, possibly into the gap between items.
    Leave,
}

fn track_hover(indicator: &mut NavIndicator, direction: Direction, hover: Hover) {
    match hover {
        Hover::Enter { index, container, item } => {
            indicator.hover_enter(index, direction, container, item);
        }
        Hover::Leave => indicator.hover_leave(),
    }
}

fn scroll_y() -> f64 {
    window().scroll_y().unwrap_or_default()
}

#[component]
pub fn Navbar() -> impl IntoView {
    let i18n = use_i18n();
    let fade_ms = use_motion().config().indicator_fade_ms;

    let (scrolled, set_scrolled) = signal(scroll_y() > NAVBAR_SCROLLED_AT);
    let (menu_open, set_menu_open) = signal(false);
    let indicator = RwSignal::new(NavIndicator::new());
    let list_ref = NodeRef::<html::Ul>::new();

    let handle = window_event_listener(ev::scroll, move |_| {
        let now_scrolled = scroll_y() > NAVBAR_SCROLLED_AT;
        if now_scrolled != scrolled.get_untracked() {
            set_scrolled.set(now_scrolled);
        }
    });
    on_cleanup(move || handle.remove());

    let on_item_enter = move |index: usize, event: ev::MouseEvent| {
        let Some(container) = list_ref.get_untracked() else {
            return;
        };
        let Some(item) = event
            .current_target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        else {
            return;
        };
        let hover = Hover::Enter {
            index,
            container: rect_of(&container),
            item: rect_of(&item),
        };
        let direction = i18n.direction_untracked();
        indicator.update(|indicator| track_hover(indicator, direction, hover));
    };
    let on_item_leave = move |_: ev::MouseEvent| {
        let direction = i18n.direction_untracked();
        indicator.update(|indicator| track_hover(indicator, direction, Hover::Leave));
    };

    // A direction flip moves every item; the old placement is meaningless.
    Effect::new(move |previous: Option<Direction>| {
        let direction = i18n.direction();
        if previous.is_some_and(|previous| previous != direction) {
            indicator.update(NavIndicator::hover_leave);
        }
        direction
    });

    let indicator_style = move || {
        indicator.with(|indicator| match indicator.placement() {
            Some(placement) => placement.to_style(fade_ms),
            None => format!("opacity: 0; transition: opacity {}ms ease", fade_ms),
        })
    };

    let menu_style = move || {
        let offset = if menu_open.get() {
            0.0
        } else {
            translate_toward_end(i18n.direction(), 100.0)
        };
        format!("transform: translateX({}%)", offset)
    };

    let toggle_language = move |_| {
        set_menu_open.set(false);
        i18n.toggle();
    };

    let links = move |mobile: bool| {
        NAV_ITEMS
            .iter()
            .enumerate()
            .map(|(index, (key, anchor))| {
                let key = *key;
                let href = format!("#{}", anchor);
                if mobile {
                    view! {
                        <li>
                            <a href=href class="mobile-link" on:click=move |_| set_menu_open.set(false)>
                                {move || i18n.t(key)}
                            </a>
                        </li>
                    }
                    .into_any()
                } else {
                    view! {
                        <li
                            class="nav-item"
                            on:mouseenter=move |event| on_item_enter(index, event)
                            on:mouseleave=on_item_leave
                        >
                            <a href=href class="nav-link">{move || i18n.t(key)}</a>
                        </li>
                    }
                    .into_any()
                }
            })
            .collect_view()
    };

    view! {
        <nav class="navbar" class:scrolled=move || scrolled.get()>
            <div class="nav-inner">
                <a href="#home" class="nav-brand">"BAPETCO"</a>

                <ul class="nav-links" node_ref=list_ref>
                    <li class="nav-indicator" aria-hidden="true" style=indicator_style></li>
                    {links(false)}
                </ul>

                <div class="nav-actions">
                    <button class="lang-toggle" on:click=toggle_language>
                        {move || i18n.language().toggled().label()}
                    </button>
                    <button
                        class="menu-toggle"
                        aria-label=move || i18n.t(if menu_open.get() { "nav.close" } else { "nav.menu" })
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        <span class="menu-bar"></span>
                        <span class="menu-bar"></span>
                    </button>
                </div>
            </div>

            <div class="mobile-menu" class:open=move || menu_open.get() style=menu_style>
                <ul>{links(true)}</ul>
            </div>
        </nav>
    }
}
