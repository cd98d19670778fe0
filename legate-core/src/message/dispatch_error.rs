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
use std::fmt;

/// Represents errors that can occur while dispatching messages through the mediator.
///
/// The mediator never recovers from any of these locally: every failure
/// propagates unchanged to the original caller of `run`, `query`, or
/// `broadcast`. Middlewares may catch and translate handler failures, but the
/// dispatcher itself never swallows them.
#[derive(Debug)]
pub enum DispatchError {
    /// The dispatcher was built without a valid service locator. Fatal and
    /// surfaced immediately at construction, never retried.
    Configuration(String),
    /// No handler is registered for a command or query's type signature.
    /// Routing is static, so a retry would not change the outcome; treat this
    /// as a programming or configuration error.
    HandlerNotFound {
        /// The message type that failed to resolve.
        message_type: &'static str,
    },
    /// A failure raised by a handler or middleware during pipeline execution,
    /// opaque to the mediator.
    Handler(anyhow::Error),
    /// One or more notification handlers failed during a fan-out join.
    Broadcast(AggregateError),
    /// A middleware forwarded a message, or produced a query result, of a
    /// different concrete type than the pipeline was built for.
    TypeMismatch {
        /// The concrete type the pipeline expected.
        expected: &'static str,
    },
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::Configuration(reason) => {
                write!(f, "dispatcher configuration error: {}", reason)
            }
            DispatchError::HandlerNotFound { message_type } => {
                write!(f, "no handler registered for {}", message_type)
            }
            DispatchError::Handler(error) => write!(f, "handler failed: {}", error),
            DispatchError::Broadcast(aggregate) => write!(f, "broadcast failed: {}", aggregate),
            DispatchError::TypeMismatch { expected } => {
                write!(f, "pipeline forwarded an unexpected type, expected {}", expected)
            }
        }
    }
}

impl std::error::Error for DispatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DispatchError::Handler(error) => Some(error.as_ref()),
            DispatchError::Broadcast(aggregate) => Some(aggregate),
            _ => None,
        }
    }
}

/// Converts an opaque handler-domain error into a pipeline failure, so
/// middlewares and handlers can use `?` on their own error types.
impl From<anyhow::Error> for DispatchError {
    fn from(error: anyhow::Error) -> Self {
        DispatchError::Handler(error)
    }
}

impl From<AggregateError> for DispatchError {
    fn from(aggregate: AggregateError) -> Self {
        DispatchError::Broadcast(aggregate)
    }
}

/// The collected failures of a notification fan-out join.
///
/// Every handler is awaited before this is built, so it carries one entry per
/// failed handler, not just the first.
#[derive(Debug)]
pub struct AggregateError {
    failures: Vec<DispatchError>,
}

impl AggregateError {
    pub(crate) fn new(failures: Vec<DispatchError>) -> Self {
        Self { failures }
    }

    /// Returns every individual failure, in handler resolution order.
    pub fn failures(&self) -> &[DispatchError] {
        &self.failures
    }

    /// Consumes the aggregate, yielding the individual failures.
    pub fn into_failures(self) -> Vec<DispatchError> {
        self.failures
    }
}

impl fmt::Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} notification handler(s) failed", self.failures.len())?;
        for failure in &self.failures {
            write!(f, "; {}", failure)?;
        }
        Ok(())
    }
}

impl std::error::Error for AggregateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.failures
            .first()
            .map(|failure| failure as &(dyn std::error::Error + 'static))
    }
}
