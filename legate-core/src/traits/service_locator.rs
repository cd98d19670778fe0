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
use std::any::TypeId;
use std::sync::Arc;

use static_assertions::assert_obj_safe;

use crate::traits::{AnyCommandHandler, AnyNotificationHandler, AnyQueryHandler, Middleware};

/// A provider for mediator services: command handlers, notification handlers,
/// query handlers, and the middleware chain.
///
/// The dispatcher consumes this contract read-only. Handler resolution happens
/// once per dispatch call; the middleware list is retrieved once, at dispatcher
/// construction, and its order defines the outermost-first pipeline position of
/// each middleware. Registration order is a caller-provided, deterministic
/// contract.
pub trait ServiceLocator: Send + Sync {
    /// Resolves the single handler for a command type, if one is registered.
    fn command_handler(&self, command_type: TypeId) -> Option<Arc<dyn AnyCommandHandler>>;

    /// Resolves the single handler registered for the exact
    /// `(query type, result type)` pair, if one is registered.
    fn query_handler(
        &self,
        query_type: TypeId,
        result_type: TypeId,
    ) -> Option<Arc<dyn AnyQueryHandler>>;

    /// Resolves every handler registered for a notification type. May be empty.
    fn notification_handlers(
        &self,
        notification_type: TypeId,
    ) -> Vec<Arc<dyn AnyNotificationHandler>>;

    /// Returns the middlewares in registration order, outermost first.
    fn middlewares(&self) -> Vec<Arc<dyn Middleware>>;
}

assert_obj_safe!(ServiceLocator);
