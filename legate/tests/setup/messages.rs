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
use legate::prelude::*;

/// Creates a widget. Routed to exactly one handler.
#[derive(Debug, Message)]
pub struct CreateWidget {
    pub message_id: MessageId,
    pub widget_id: u64,
}

impl Command for CreateWidget {}

impl CreateWidget {
    pub fn new(widget_id: u64) -> Self {
        Self {
            message_id: MessageId::new(),
            widget_id,
        }
    }
}

/// Renames a widget. Middlewares may forward a replacement instance.
#[derive(Debug, Message)]
pub struct RenameWidget {
    pub message_id: MessageId,
    pub widget_id: u64,
    pub name: String,
}

impl Command for RenameWidget {}

impl RenameWidget {
    pub fn new(widget_id: u64, name: impl Into<String>) -> Self {
        Self {
            message_id: MessageId::new(),
            widget_id,
            name: name.into(),
        }
    }
}

/// The read model produced by widget queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Widget {
    pub widget_id: u64,
    pub name: String,
}

/// Looks up a single widget by id.
#[derive(Debug, Message)]
pub struct GetWidget {
    pub message_id: MessageId,
    pub widget_id: u64,
}

impl Query for GetWidget {
    type Result = Widget;
}

impl GetWidget {
    pub fn new(widget_id: u64) -> Self {
        Self {
            message_id: MessageId::new(),
            widget_id,
        }
    }
}

/// Counts the known widgets. A caching middleware may answer this without
/// reaching the handler.
#[derive(Debug, Message)]
pub struct CountWidgets {
    pub message_id: MessageId,
}

impl Query for CountWidgets {
    type Result = usize;
}

impl CountWidgets {
    pub fn new() -> Self {
        Self {
            message_id: MessageId::new(),
        }
    }
}

/// Announces that a widget came into existence. Zero or more observers.
#[derive(Debug, Message)]
pub struct WidgetCreated {
    pub message_id: MessageId,
    pub widget_id: u64,
}

impl Notification for WidgetCreated {}

impl WidgetCreated {
    pub fn new(widget_id: u64) -> Self {
        Self {
            message_id: MessageId::new(),
            widget_id,
        }
    }
}
