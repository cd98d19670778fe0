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
use crate::traits::{Command, Message};

/// An asynchronous command handler.
///
/// A command makes changes to the system but does not produce a result. It
/// can broadcast notifications which may result in further changes.
#[async_trait]
pub trait CommandHandler<C>: Send + Sync
where
    C: Command,
{
    /// Handles a command asynchronously.
    ///
    /// The cancellation token is the one supplied by the original caller;
    /// a handler may observe it and abort early.
    async fn handle_command(&self, command: &C, cancel: &CancellationToken) -> anyhow::Result<()>;
}

/// The object-safe form of [`CommandHandler`] that the
/// [`ServiceLocator`](crate::traits::ServiceLocator) resolves and the pipeline
/// invokes. Implementations downcast the erased message back to the concrete
/// command type.
#[async_trait]
pub trait AnyCommandHandler: Send + Sync {
    /// Handles a type-erased command asynchronously.
    async fn handle_any_command(
        &self,
        command: &dyn Message,
        cancel: &CancellationToken,
    ) -> Result<(), DispatchError>;
}
