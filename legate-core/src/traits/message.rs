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
use crate::message::MessageId;
use crate::traits::AnyMessage;

/// An identity-bearing message routed through the mediator.
///
/// Every message carries a globally unique [`MessageId`] assigned when it was
/// constructed. The identifier exists for traceability and idempotency hooks
/// outside the mediator; routing never consults it.
pub trait Message: AnyMessage {
    /// Returns the globally unique identifier assigned at construction.
    fn message_id(&self) -> MessageId;
}

/// A command makes changes to the system but does not produce a result. It
/// can broadcast notifications which may result in further changes.
///
/// Commands route to exactly one [`CommandHandler`](crate::traits::CommandHandler).
pub trait Command: Message {}

/// A query does not change but reads the system state to produce a result.
/// It can broadcast notifications which may result in indirect changes.
///
/// Queries route to exactly one [`QueryHandler`](crate::traits::QueryHandler),
/// selected by the `(query, result)` type pair.
pub trait Query: Message {
    /// The result type this query produces.
    type Result: Send + 'static;
}

/// A notification can result in the execution of further commands or queries
/// and, as a result, may cause indirect changes to the system. It, however,
/// does not produce a result.
///
/// Notifications route to zero or more
/// [`NotificationHandler`](crate::traits::NotificationHandler)s, invoked
/// concurrently as siblings.
pub trait Notification: Message {}
