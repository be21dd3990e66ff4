// src/gui/router.rs
use super::pages::{ self, Page };

pub static PAGES: &[&'static dyn Page] = &[
    &pages::map::PAGE,
    &pages::plots::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}
