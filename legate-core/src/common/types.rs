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

//! Defines common internal type aliases used within `legate-core`.
//!
//! This module centralizes type definitions for the registry maps and the
//! type-erased query result to improve code readability and maintainability.

use std::any::{Any, TypeId};
use std::sync::Arc;

use dashmap::DashMap;

use crate::traits::{AnyCommandHandler, AnyNotificationHandler, AnyQueryHandler};

/// A query result in type-erased form, as it travels back out through the
/// middleware chain. The dispatcher downcasts it to the query's declared
/// result type at the boundary.
pub type QueryValue = Box<dyn Any + Send>;

/// Crate-internal: map storing command handlers (`TypeId` -> handler).
pub(crate) type CommandHandlerMap = DashMap<TypeId, Arc<dyn AnyCommandHandler>>;

/// Crate-internal: map storing query handlers, keyed by the
/// `(query type, result type)` pair.
pub(crate) type QueryHandlerMap = DashMap<(TypeId, TypeId), Arc<dyn AnyQueryHandler>>;

/// Crate-internal: map storing notification handlers (`TypeId` -> handlers,
/// in registration order).
pub(crate) type NotificationHandlerMap = DashMap<TypeId, Vec<Arc<dyn AnyNotificationHandler>>>;
