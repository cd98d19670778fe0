/*
 * Copyright (c) 2024. Govcraft
 *
 * Licensed under either of
 *   * Apache License, Version 2.0 (the "License");
 *     you may not use this file except in compliance with the License.
 *     You may obtain a copy of the License at http://www.apache.org/licenses/LICENSE-2.0
 *   * MIT license: http://opensource.org/licenses/MIT
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the applicable License for the specific language governing permissions and
 * limitations under that License.
 */
#![forbid(unsafe_code)]

//! Legate Macro Library
//!
//! This library provides procedural macros for the Legate mediator. It
//! includes a derive macro that removes the identity boilerplate from message
//! types. The macro emits paths through the `legate` facade crate, so it is
//! meant to be used via `legate::prelude`.
//!
//! # Message Macro
//!
//! The [`Message`](macro@Message) derive implements the `Message` trait by
//! locating the struct's `MessageId` field:
//!
//! ```ignore
//! use legate::prelude::*;
//!
//! #[derive(Debug, Message)]
//! pub struct CreateWidget {
//!     pub message_id: MessageId,
//!     pub name: String,
//! }
//!
//! impl Command for CreateWidget {}
//! ```
//!
//! The field is found by, in order: an explicit `#[message_id]` attribute, a
//! field named `message_id`, or the first field whose type is `MessageId`.

use proc_macro::TokenStream;

use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Type};

/// Derives the `Message` trait for a struct carrying a `MessageId` field.
///
/// Marker traits stay explicit: after deriving `Message`, implement
/// `Command`, `Query`, or `Notification` by hand to pick the message kind.
#[proc_macro_derive(Message, attributes(message_id))]
pub fn derive_message(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let field = match message_id_field(&input) {
        Ok(field) => field,
        Err(error) => return error.to_compile_error().into(),
    };

    let expanded = quote! {
        impl #impl_generics ::legate::prelude::Message for #name #ty_generics #where_clause {
            fn message_id(&self) -> ::legate::prelude::MessageId {
                self.#field
            }
        }
    };

    expanded.into()
}

/// Locates the identity field: `#[message_id]` marker first, then a field
/// named `message_id`, then the first field typed `MessageId`.
fn message_id_field(input: &DeriveInput) -> syn::Result<syn::Ident> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "`derive(Message)` supports structs only",
        ));
    };

    let Fields::Named(fields) = &data.fields else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "`derive(Message)` requires named fields",
        ));
    };

    for field in &fields.named {
        if field
            .attrs
            .iter()
            .any(|attr| attr.path().is_ident("message_id"))
        {
            if let Some(ident) = &field.ident {
                return Ok(ident.clone());
            }
        }
    }

    for field in &fields.named {
        if let Some(ident) = &field.ident {
            if ident == "message_id" {
                return Ok(ident.clone());
            }
        }
    }

    for field in &fields.named {
        if let Type::Path(path) = &field.ty {
            let is_message_id = path
                .path
                .segments
                .last()
                .is_some_and(|segment| segment.ident == "MessageId");
            if is_message_id {
                if let Some(ident) = &field.ident {
                    return Ok(ident.clone());
                }
            }
        }
    }

    Err(syn::Error::new_spanned(
        &input.ident,
        "`derive(Message)` requires a `MessageId` field",
    ))
}
