//! Language persistence in `localStorage`.

use crate::utils::constants::LANGUAGE_STORAGE_KEY;
use lib_i18n::Language;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

pub fn load_language() -> Option<Language> {
    let stored = local_storage()?.get_item(LANGUAGE_STORAGE_KEY).ok()??;
    Language::from_tag(&stored)
}

pub fn save_language(language: Language) {
    let Some(storage) = local_storage() else {
        return;
    };
    if let Err(e) = storage.set_item(LANGUAGE_STORAGE_KEY, language.code()) {
        log::warn!("could not persist language: {:?}", e);
    }
}
