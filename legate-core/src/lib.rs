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
// #![warn(missing_docs)]
//! Legate Core Library
//!
//! This library provides the core functionality for the Legate mediator.
//! It includes the dispatcher, the middleware pipeline, trait definitions,
//! and prelude exports.

/// Dispatcher, pipeline, and registry structures used throughout Legate.
pub(crate) mod common;

pub(crate) mod message;
/// Trait definitions used in the Legate mediator.
pub(crate) mod traits;

/// Prelude module for convenient imports.
///
/// This module re-exports commonly used items from the `common`, `message`,
/// and `traits` modules, as well as the `async_trait` crate and the
/// cancellation token threaded through every pipeline.
pub mod prelude {
    pub use async_trait;
    pub use tokio_util::sync::CancellationToken;

    pub use crate::common::{
        CommandNext, Dispatcher, DispatcherBuilder, HandlerRegistry, NotificationNext, QueryNext,
        QueryValue,
    };
    pub use crate::message::{AggregateError, DispatchError, MessageId};
    pub use crate::traits::{
        AnyCommandHandler, AnyMessage, AnyNotificationHandler, AnyQueryHandler, Command,
        CommandHandler, Message, Middleware, Notification, NotificationHandler, Query,
        QueryHandler, ServiceLocator,
    };
}
