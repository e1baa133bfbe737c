//! Document-level side effects of a language change.

use lib_i18n::{font_class, Direction, DocumentRoot, FontVariant, Language};

/// Writes `lang`, `dir` and the font class onto `<html>`.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlDocument;

impl DocumentRoot for HtmlDocument {
    fn apply(&mut self, language: Language, direction: Direction) {
        let Some(root) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
        else {
            log::warn!("no document element, cannot apply language {}", language);
            return;
        };

        root.set_attribute("lang", language.code()).ok();
        root.set_attribute("dir", direction.as_str()).ok();

        let classes = root.class_list();
        for other in Language::all() {
            classes.remove_1(&font_class(other, FontVariant::Primary)).ok();
        }
        classes.add_1(&font_class(language, FontVariant::Primary)).ok();
        log::debug!("document set to lang={} dir={}", language, direction);
    }
}
