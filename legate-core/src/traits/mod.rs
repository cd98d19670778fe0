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

//! Defines the core traits that establish the fundamental contracts of the Legate mediator.
//!
//! This module aggregates the traits that define the capabilities and interactions
//! within the mediator: the message kinds, the handler contract for each kind, the
//! middleware pipeline hook, and the service locator the dispatcher resolves against.
//!
//! # Key Traits
//!
//! *   [`AnyMessage`]: A blanket-implemented erasure trait required for all types used
//!     as messages. Ensures messages are `Send`, `Sync`, `Debug`, and support
//!     downcasting via `Any`.
//! *   [`Message`]: The identity-bearing contract layered on top of [`AnyMessage`];
//!     every command, query, and notification carries a [`MessageId`](crate::message::MessageId).
//! *   [`Command`], [`Query`], [`Notification`]: The three disjoint message kinds.
//! *   [`CommandHandler`], [`QueryHandler`], [`NotificationHandler`]: One handler
//!     contract per message kind, together with their object-safe erased counterparts
//!     used by the service locator.
//! *   [`Middleware`]: The pipeline interceptor, with one hook per message kind.
//! *   [`ServiceLocator`]: The read-only registry contract the dispatcher consumes.

// --- Public Re-exports ---
pub use any_message::AnyMessage;
pub use command_handler::{AnyCommandHandler, CommandHandler};
pub use message::{Command, Message, Notification, Query};
pub use middleware::Middleware;
pub use notification_handler::{AnyNotificationHandler, NotificationHandler};
pub use query_handler::{AnyQueryHandler, QueryHandler};
pub use service_locator::ServiceLocator;

// --- Submodules ---

/// Defines the [`AnyMessage`] erasure trait.
mod any_message;
/// Defines the [`CommandHandler`] contract and its erased counterpart.
mod command_handler;
/// Defines the identity-bearing [`Message`] trait and the three message kinds.
mod message;
/// Defines the [`Middleware`] pipeline hook.
mod middleware;
/// Defines the [`NotificationHandler`] contract and its erased counterpart.
mod notification_handler;
/// Defines the [`QueryHandler`] contract and its erased counterpart.
mod query_handler;
/// Defines the [`ServiceLocator`] resolution contract.
mod service_locator;
