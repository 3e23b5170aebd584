//! Lifetime-free Dioxus wrappers for the Pico.css layout elements.
//! Pico styles these semantic tags directly, so the wrappers carry no styling of their own.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

/// A centered container for your content.
/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}
