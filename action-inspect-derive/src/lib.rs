mod actions_macro;
mod editable_macro;

use proc_macro::TokenStream;

/// Derives `Editable` for a named struct or a unit enum.
///
/// Struct fields: public fields are exposed in the editor, non-public ones
/// render read-only unless marked `#[editable(expose)]`; `#[editable(skip)]`
/// removes a field from the descriptor entirely (it is rebuilt with
/// `Default::default()` on the way back). The type itself must implement
/// `Default` unless marked `#[editable(no_default)]`.
#[proc_macro_derive(Editable, attributes(editable))]
pub fn editable_macro_derive(input: TokenStream) -> TokenStream {
    editable_macro::impl_editable_macro(input)
}

/// Marks an impl block whose `#[action]` methods become invocable
/// operations, generating the block's `ActionSource` impl.
///
/// `#[action(name = "...")]` overrides the button label. Methods taking
/// `&self`/`&mut self` are instance operations, receiverless ones are
/// static. Actions return `()` or `Result<(), E: Display>`.
#[proc_macro_attribute]
pub fn actions(attr: TokenStream, item: TokenStream) -> TokenStream {
    actions_macro::impl_actions_macro(attr, item)
}
