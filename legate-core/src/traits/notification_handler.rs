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
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::message::DispatchError;
use crate::traits::{Message, Notification};

/// An asynchronous notification handler.
///
/// A notification can result in the execution of further commands or queries
/// and, as a result, may cause indirect changes to the system. It, however,
/// does not produce a result.
#[async_trait]
pub trait NotificationHandler<N>: Send + Sync
where
    N: Notification,
{
    /// Handles a notification asynchronously.
    async fn handle_notification(
        &self,
        notification: &N,
        cancel: &CancellationToken,
    ) -> anyhow::Result<()>;
}

/// The object-safe form of [`NotificationHandler`] that the
/// [`ServiceLocator`](crate::traits::ServiceLocator) resolves and the fan-out
/// join invokes.
#[async_trait]
pub trait AnyNotificationHandler: Send + Sync {
    /// Handles a type-erased notification asynchronously.
    async fn handle_any_notification(
        &self,
        notification: &dyn Message,
        cancel: &CancellationToken,
    ) -> Result<(), DispatchError>;
}
