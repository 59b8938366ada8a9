//! Draft and file fixtures
#![allow(dead_code)]

use estate_lister::draft::{DraftStore, FieldChange};
use estate_lister::types::ImageFile;

/// A small in-memory JPEG stand-in
pub fn image(name: &str) -> ImageFile {
    ImageFile::new(name, format!("bytes of {name}").into_bytes())
}

/// Several images named `photo0.jpg`, `photo1.jpg`, ...
pub fn images(count: usize) -> Vec<ImageFile> {
    (0..count).map(|i| image(&format!("photo{i}.jpg"))).collect()
}

/// Apply form events the way the page would
pub fn fill(store: &mut DraftStore, events: &[(&str, &str, bool)]) {
    for (id, value, checked) in events {
        store.set_field(FieldChange::from_input(id, value, *checked).unwrap());
    }
}

/// Text fields filled in, no offer, no images
pub fn filled_store() -> DraftStore {
    let mut store = DraftStore::new();
    fill(
        &mut store,
        &[
            ("name", "Bright family home near school", false),
            ("description", "Three floors, garden, quiet street", false),
            ("address", "27 Elm Avenue", false),
            ("sale", "", true),
            ("bedrooms", "3", false),
            ("bathrooms", "2", false),
            ("regularPrice", "320000", false),
            ("parking", "", true),
        ],
    );
    store
}

/// A draft ready to submit: filled in with one image
pub fn valid_store() -> DraftStore {
    let mut store = filled_store();
    store.append_images(vec!["https://cdn.test/cover.jpg".to_string()]);
    store
}
