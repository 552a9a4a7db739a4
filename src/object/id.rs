use serde::{Deserialize, Serialize};
use std::fmt;

/// In-memory handle identifying a remote object without holding its data.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id {
    class_name: String,
    object_id: String,
}

impl Id {
    pub fn new(class_name: impl Into<String>, object_id: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            object_id: object_id.into(),
        }
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn object_id(&self) -> &str {
        &self.object_id
    }

    /// Wire form used wherever the REST API expects a reference.
    pub fn to_pointer(&self) -> Pointer {
        Pointer::new(self.class_name.clone(), self.object_id.clone())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.class_name, self.object_id)
    }
}

/// `{"__type": "Pointer", "className": .., "objectId": ..}`
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "WirePointer", into = "WirePointer")]
pub struct Pointer {
    pub class_name: String,
    pub object_id: String,
}

#[derive(Serialize, Deserialize)]
enum PointerType {
    Pointer,
}

#[derive(Serialize, Deserialize)]
struct WirePointer {
    #[serde(rename = "__type")]
    kind: PointerType,
    #[serde(rename = "className")]
    class_name: String,
    #[serde(rename = "objectId")]
    object_id: String,
}

impl From<WirePointer> for Pointer {
    fn from(wire: WirePointer) -> Self {
        Pointer::new(wire.class_name, wire.object_id)
    }
}

impl From<Pointer> for WirePointer {
    fn from(pointer: Pointer) -> Self {
        WirePointer {
            kind: PointerType::Pointer,
            class_name: pointer.class_name,
            object_id: pointer.object_id,
        }
    }
}

impl Pointer {
    pub fn new(class_name: impl Into<String>, object_id: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            object_id: object_id.into(),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "__type": "Pointer",
            "className": self.class_name,
            "objectId": self.object_id,
        })
    }
}

impl From<&Id> for Pointer {
    fn from(id: &Id) -> Self {
        id.to_pointer()
    }
}
