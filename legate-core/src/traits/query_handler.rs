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

use crate::common::QueryValue;
use crate::message::DispatchError;
use crate::traits::{Message, Query};

/// An asynchronous query handler.
///
/// A query does not change but reads the system state to produce a result.
/// It can broadcast notifications which may result in indirect changes.
#[async_trait]
pub trait QueryHandler<Q>: Send + Sync
where
    Q: Query,
{
    /// Handles a query asynchronously, producing the query's result.
    async fn handle_query(
        &self,
        query: &Q,
        cancel: &CancellationToken,
    ) -> anyhow::Result<Q::Result>;
}

/// The object-safe form of [`QueryHandler`] that the
/// [`ServiceLocator`](crate::traits::ServiceLocator) resolves and the pipeline
/// invokes. The result travels type-erased as a [`QueryValue`] until the
/// dispatcher downcasts it at the boundary.
#[async_trait]
pub trait AnyQueryHandler: Send + Sync {
    /// Handles a type-erased query asynchronously.
    async fn handle_any_query(
        &self,
        query: &dyn Message,
        cancel: &CancellationToken,
    ) -> Result<QueryValue, DispatchError>;
}
