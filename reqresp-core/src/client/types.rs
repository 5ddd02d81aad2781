use crate::pb;

/// Optional routing tag attached to a message.
///
/// An absent topic and a topic whose value is the empty string are two different requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Topic {
    /// A topic value, possibly the empty string.
    Present(String),
    /// No topic at all.
    #[default]
    Absent,
}

impl Topic {
    /// Returns the topic value, if there is one.
    pub fn as_deref(&self) -> Option<&str> {
        match self {
            Topic::Present(topic) => Some(topic),
            Topic::Absent => None,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Topic::Present(_))
    }
}

impl From<Option<String>> for Topic {
    fn from(topic: Option<String>) -> Self {
        match topic {
            Some(topic) => Topic::Present(topic),
            None => Topic::Absent,
        }
    }
}

impl From<Option<&str>> for Topic {
    fn from(topic: Option<&str>) -> Self {
        topic.map(str::to_string).into()
    }
}

impl From<&str> for Topic {
    fn from(topic: &str) -> Self {
        Topic::Present(topic.to_string())
    }
}

impl From<String> for Topic {
    fn from(topic: String) -> Self {
        Topic::Present(topic)
    }
}

impl From<Topic> for pb::OptionalTopic {
    fn from(topic: Topic) -> Self {
        let topic = match topic {
            Topic::Present(topic) => Some(pb::Topic { topic }),
            Topic::Absent => None,
        };

        pb::OptionalTopic { topic }
    }
}

/// A request addressed to a single peer.
///
/// Owns copies of its fields, so building one never invalidates the caller's values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendRequest {
    /// Opaque identifier of the destination peer.
    pub peer_id: String,
    /// The payload sent to the peer.
    pub data: String,
    pub topic: Topic,
}

impl SendRequest {
    /// Creates a request without a topic.
    pub fn new(peer_id: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            peer_id: peer_id.into(),
            data: data.into(),
            topic: Topic::Absent,
        }
    }

    /// Replaces the topic of the request.
    pub fn with_topic(mut self, topic: impl Into<Topic>) -> Self {
        self.topic = topic.into();
        self
    }
}

impl From<SendRequest> for pb::SendRequest {
    fn from(request: SendRequest) -> Self {
        let SendRequest {
            peer_id,
            data,
            topic,
        } = request;

        let msg = pb::Message {
            data: Some(pb::Payload { data }),
            topic: Some(topic.into()),
        };

        pb::SendRequest {
            peer: Some(pb::Peer { peer_id }),
            msg: Some(msg),
        }
    }
}
