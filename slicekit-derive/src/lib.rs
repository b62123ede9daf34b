//! Derive macro for slicekit's `Overlay` trait.
//!
//! This crate provides a procedural macro that generates field-by-field
//! `Overlay` implementations, so "merge the non-default fields of a patch
//! into a stored value" needs no runtime reflection.
//!
//! # Available Derive Macros
//!
//! - [`Overlay`]: Generates `slicekit::Overlay` for structs
//!
//! # Example
//!
//! ```rust,ignore
//! use slicekit::Overlay;
//!
//! #[derive(Clone, Default, PartialEq, Overlay)]
//! struct Line {
//!     sku: String,
//!     quantity: u32,
//! }
//!
//! #[derive(Clone, Default, PartialEq, Overlay)]
//! struct Order {
//!     id: u64,
//!     note: String,
//!     #[overlay(each)]
//!     lines: Vec<Line>,
//!     #[overlay(skip)]
//!     revision: u32,
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod overlay;

use proc_macro::TokenStream;

/// Derive macro for generating `slicekit::Overlay` implementations.
///
/// The generated `overlay(&mut self, source: &Self)` visits every field in
/// declaration order.
///
/// # Requirements
///
/// - The type must be a struct with named or unnamed fields
/// - Plain fields must implement `Clone + Default + PartialEq`
/// - `#[overlay(each)]` fields must be `Vec<T>` with `T: Overlay + Clone`
///
/// # Field Attributes
///
/// - **No attribute**: the field is replaced when the source field differs
///   from its default value. Fields whose type is `Vec<_>` are instead
///   replaced wholesale, even by an empty vector.
/// - **`#[overlay(each)]`**: the vector is merged position by position with
///   `slicekit::overlay::overlay_each`.
/// - **`#[overlay(skip)]`**: the field is never touched.
///
/// # Generated Code
///
/// ```rust,ignore
/// impl Overlay for StructName {
///     fn overlay(&mut self, source: &Self) {
///         slicekit::overlay::overlay_field(&mut self.plain, &source.plain);
///         self.list.clone_from(&source.list);
///         slicekit::overlay::overlay_each(&mut self.nested, &source.nested);
///     }
/// }
/// ```
///
/// # Example
///
/// ```rust,ignore
/// use slicekit::Overlay;
///
/// #[derive(Clone, Debug, Default, PartialEq, Overlay)]
/// struct Account {
///     email: String,
///     credits: i64,
/// }
///
/// let mut stored = Account { email: "a@example.com".into(), credits: 10 };
/// stored.overlay(&Account { email: String::new(), credits: 25 });
/// assert_eq!(stored.email, "a@example.com");
/// assert_eq!(stored.credits, 25);
/// ```
///
/// # Generics
///
/// Generic structs are supported. The generated impl keeps the struct's own
/// bounds and adds one `where` predicate per overlaid field, for example
/// `T: Clone + Default + PartialEq` for a plain field of type `T`.
#[proc_macro_derive(Overlay, attributes(overlay))]
pub fn derive_overlay(input: TokenStream) -> TokenStream {
    overlay::derive_overlay_impl(input)
}
