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
use std::any::{type_name, TypeId};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use derive_new::new;
use tokio_util::sync::CancellationToken;
use tracing::trace;

use crate::common::types::{CommandHandlerMap, NotificationHandlerMap, QueryHandlerMap};
use crate::common::QueryValue;
use crate::message::DispatchError;
use crate::traits::{
    AnyCommandHandler, AnyNotificationHandler, AnyQueryHandler, Command, CommandHandler, Message,
    Middleware, Notification, NotificationHandler, Query, QueryHandler, ServiceLocator,
};

/// A service locator backed by explicit, startup-time registration.
///
/// Handlers and middlewares are registered per message kind before the
/// registry is shared with a dispatcher; registration takes `&mut self` and
/// chains, and each map is keyed by a stable `TypeId`, so resolution never
/// touches reflection. Middlewares keep their registration order, which is
/// the outermost-first pipeline order.
#[derive(Default)]
pub struct HandlerRegistry {
    command_handlers: CommandHandlerMap,
    query_handlers: QueryHandlerMap,
    notification_handlers: NotificationHandlerMap,
    middlewares: Vec<Arc<dyn Middleware>>,
}

impl HandlerRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the single handler for the command type `C`, replacing any
    /// previous registration for the same type.
    pub fn register_command_handler<C, H>(&mut self, handler: H) -> &mut Self
    where
        C: Command,
        H: CommandHandler<C> + 'static,
    {
        trace!(message_type = type_name::<C>(), "registering command handler");
        self.command_handlers.insert(
            TypeId::of::<C>(),
            Arc::new(CommandHandlerAdapter::<C, _>::new(handler)),
        );
        self
    }

    /// Registers the single handler for the query type `Q`, keyed by the
    /// `(query, result)` type pair.
    pub fn register_query_handler<Q, H>(&mut self, handler: H) -> &mut Self
    where
        Q: Query,
        H: QueryHandler<Q> + 'static,
    {
        trace!(message_type = type_name::<Q>(), "registering query handler");
        self.query_handlers.insert(
            (TypeId::of::<Q>(), TypeId::of::<Q::Result>()),
            Arc::new(QueryHandlerAdapter::<Q, _>::new(handler)),
        );
        self
    }

    /// Registers an additional handler for the notification type `N`.
    /// Notifications accept any number of handlers, including none.
    pub fn register_notification_handler<N, H>(&mut self, handler: H) -> &mut Self
    where
        N: Notification,
        H: NotificationHandler<N> + 'static,
    {
        trace!(
            message_type = type_name::<N>(),
            "registering notification handler"
        );
        self.notification_handlers
            .entry(TypeId::of::<N>())
            .or_default()
            .push(Arc::new(NotificationHandlerAdapter::<N, _>::new(handler)));
        self
    }

    /// Appends a middleware to the chain. Registration order is pipeline
    /// order, outermost first.
    pub fn register_middleware<M>(&mut self, middleware: M) -> &mut Self
    where
        M: Middleware + 'static,
    {
        trace!(
            middleware = type_name::<M>(),
            position = self.middlewares.len(),
            "registering middleware"
        );
        self.middlewares.push(Arc::new(middleware));
        self
    }
}

impl ServiceLocator for HandlerRegistry {
    fn command_handler(&self, command_type: TypeId) -> Option<Arc<dyn AnyCommandHandler>> {
        self.command_handlers
            .get(&command_type)
            .map(|entry| Arc::clone(entry.value()))
    }

    fn query_handler(
        &self,
        query_type: TypeId,
        result_type: TypeId,
    ) -> Option<Arc<dyn AnyQueryHandler>> {
        self.query_handlers
            .get(&(query_type, result_type))
            .map(|entry| Arc::clone(entry.value()))
    }

    fn notification_handlers(
        &self,
        notification_type: TypeId,
    ) -> Vec<Arc<dyn AnyNotificationHandler>> {
        self.notification_handlers
            .get(&notification_type)
            .map(|entry| entry.value().clone())
            .unwrap_or_default()
    }

    fn middlewares(&self) -> Vec<Arc<dyn Middleware>> {
        self.middlewares.clone()
    }
}

impl fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("command_handlers", &self.command_handlers.len())
            .field("query_handlers", &self.query_handlers.len())
            .field("notification_handlers", &self.notification_handlers.len())
            .field("middlewares", &self.middlewares.len())
            .finish()
    }
}

/// Bridges a typed [`CommandHandler`] into the object-safe form the locator
/// traffics in, downcasting the erased command back to `C`.
#[derive(new)]
struct CommandHandlerAdapter<C, H> {
    handler: H,
    _command: PhantomData<fn(C)>,
}

#[async_trait]
impl<C, H> AnyCommandHandler for CommandHandlerAdapter<C, H>
where
    C: Command,
    H: CommandHandler<C>,
{
    async fn handle_any_command(
        &self,
        command: &dyn Message,
        cancel: &CancellationToken,
    ) -> Result<(), DispatchError> {
        let command = command
            .as_any()
            .downcast_ref::<C>()
            .ok_or_else(|| DispatchError::TypeMismatch {
                expected: type_name::<C>(),
            })?;
        self.handler
            .handle_command(command, cancel)
            .await
            .map_err(DispatchError::Handler)
    }
}

/// Bridges a typed [`QueryHandler`] into the object-safe form, boxing the
/// typed result into a [`QueryValue`] for the trip back out.
#[derive(new)]
struct QueryHandlerAdapter<Q, H> {
    handler: H,
    _query: PhantomData<fn(Q)>,
}

#[async_trait]
impl<Q, H> AnyQueryHandler for QueryHandlerAdapter<Q, H>
where
    Q: Query,
    H: QueryHandler<Q>,
{
    async fn handle_any_query(
        &self,
        query: &dyn Message,
        cancel: &CancellationToken,
    ) -> Result<QueryValue, DispatchError> {
        let query = query
            .as_any()
            .downcast_ref::<Q>()
            .ok_or_else(|| DispatchError::TypeMismatch {
                expected: type_name::<Q>(),
            })?;
        let result = self
            .handler
            .handle_query(query, cancel)
            .await
            .map_err(DispatchError::Handler)?;
        Ok(Box::new(result))
    }
}

/// Bridges a typed [`NotificationHandler`] into the object-safe form.
#[derive(new)]
struct NotificationHandlerAdapter<N, H> {
    handler: H,
    _notification: PhantomData<fn(N)>,
}

#[async_trait]
impl<N, H> AnyNotificationHandler for NotificationHandlerAdapter<N, H>
where
    N: Notification,
    H: NotificationHandler<N>,
{
    async fn handle_any_notification(
        &self,
        notification: &dyn Message,
        cancel: &CancellationToken,
    ) -> Result<(), DispatchError> {
        let notification = notification.as_any().downcast_ref::<N>().ok_or_else(|| {
            DispatchError::TypeMismatch {
                expected: type_name::<N>(),
            }
        })?;
        self.handler
            .handle_notification(notification, cancel)
            .await
            .map_err(DispatchError::Handler)
    }
}
