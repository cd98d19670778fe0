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
#![forbid(missing_docs)] // Keep this to enforce coverage

//! # Legate
//!
//! This crate provides an in-process mediator: a single point of entry that
//! routes commands, queries, and notifications to explicitly registered
//! handlers through one uniformly ordered middleware pipeline.
//!
//! ## Key Concepts
//!
//! - **Messages**: Identity-bearing values implementing `Message` plus one of
//!   the `Command`, `Query`, or `Notification` marker traits. The
//!   `derive(Message)` macro removes the identity boilerplate.
//! - **Handlers**: One async handler contract per message kind. Commands and
//!   queries resolve to exactly one handler; notifications to zero or more,
//!   invoked concurrently and joined.
//! - **Middleware**: Interceptors wrapping every message kind, each free to
//!   short-circuit, retry, or pass through via its `next` continuation.
//!   Registration order is pipeline order, outermost first, fixed at
//!   dispatcher construction.
//! - **Registry (`HandlerRegistry`)**: The provided service locator; explicit
//!   `TypeId`-keyed registration, no reflection.
//! - **Dispatcher**: Built from any `ServiceLocator`; `run`, `query`, and
//!   `broadcast` are safe to call concurrently on a shared instance.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use legate::prelude::*;
//!
//! #[derive(Debug, Message)]
//! struct CreateWidget {
//!     message_id: MessageId,
//!     name: String,
//! }
//!
//! impl Command for CreateWidget {}
//!
//! struct CreateWidgetHandler;
//!
//! #[async_trait::async_trait]
//! impl CommandHandler<CreateWidget> for CreateWidgetHandler {
//!     async fn handle_command(
//!         &self,
//!         command: &CreateWidget,
//!         _cancel: &CancellationToken,
//!     ) -> anyhow::Result<()> {
//!         println!("creating {}", command.name);
//!         Ok(())
//!     }
//! }
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let mut registry = HandlerRegistry::new();
//! registry.register_command_handler::<CreateWidget, _>(CreateWidgetHandler);
//!
//! let dispatcher = Dispatcher::builder().locator(Arc::new(registry)).build()?;
//! let command = CreateWidget {
//!     message_id: MessageId::new(),
//!     name: "widget".to_string(),
//! };
//! dispatcher.run(&command, &CancellationToken::new()).await?;
//! # Ok(())
//! # }
//! ```

/// Prelude module for convenient imports.
///
/// Re-exports the full public surface of `legate-core` together with the
/// [`Message`](macro@prelude::Message) derive macro.
pub mod prelude {
    pub use legate_core::prelude::*;
    pub use legate_macro::Message;
}
