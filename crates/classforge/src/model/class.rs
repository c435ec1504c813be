//! Class, member and parameter definitions

use serde::{Deserialize, Serialize};

use crate::core::{TypeName, Visibility};

/// Opaque class identity
pub type ClassKey = i64;

/// A method parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDef {
    pub name: String,
    #[serde(rename = "type", default)]
    pub param_type: TypeName,
}

impl ParameterDef {
    pub fn new(name: impl Into<String>, param_type: impl Into<TypeName>) -> Self {
        Self {
            name: name.into(),
            param_type: param_type.into(),
        }
    }
}

/// A class attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDef {
    pub name: String,
    #[serde(rename = "type", default)]
    pub member_type: TypeName,
    #[serde(default)]
    pub visibility: Visibility,
}

impl PropertyDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            member_type: TypeName::default(),
            visibility: Visibility::default(),
        }
    }

    pub fn with_type(mut self, t: impl Into<TypeName>) -> Self {
        self.member_type = t.into();
        self
    }

    pub fn with_visibility(mut self, v: impl Into<Visibility>) -> Self {
        self.visibility = v.into();
        self
    }
}

/// A class operation; `member_type` is the return type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDef {
    pub name: String,
    #[serde(rename = "type", default)]
    pub member_type: TypeName,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub parameters: Vec<ParameterDef>,
}

impl MethodDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            member_type: TypeName::from("void"),
            visibility: Visibility::default(),
            parameters: Vec::new(),
        }
    }

    pub fn with_type(mut self, t: impl Into<TypeName>) -> Self {
        self.member_type = t.into();
        self
    }

    pub fn with_visibility(mut self, v: impl Into<Visibility>) -> Self {
        self.visibility = v.into();
        self
    }

    pub fn with_parameter(mut self, param: ParameterDef) -> Self {
        self.parameters.push(param);
        self
    }

    /// Returns true when the method declares no return value
    pub fn returns_void(&self) -> bool {
        self.member_type.is_void()
    }
}

/// A class in the model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDef {
    pub key: ClassKey,
    pub name: String,
    #[serde(default)]
    pub properties: Vec<PropertyDef>,
    #[serde(default)]
    pub methods: Vec<MethodDef>,
}

impl ClassDef {
    pub fn new(key: ClassKey, name: impl Into<String>) -> Self {
        Self {
            key,
            name: name.into(),
            properties: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn with_property(mut self, property: PropertyDef) -> Self {
        self.properties.push(property);
        self
    }

    pub fn with_method(mut self, method: MethodDef) -> Self {
        self.methods.push(method);
        self
    }

    pub fn add_property(&mut self, property: PropertyDef) {
        self.properties.push(property);
    }

    pub fn add_method(&mut self, method: MethodDef) {
        self.methods.push(method);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TypeToken;

    #[test]
    fn test_create_empty_class() {
        let class = ClassDef::new(1, "Animal");
        assert_eq!(class.key, 1);
        assert_eq!(class.name, "Animal");
        assert!(class.properties.is_empty());
        assert!(class.methods.is_empty());
    }

    #[test]
    fn test_add_members_keeps_order() {
        let mut class = ClassDef::new(1, "Person");
        class.add_property(PropertyDef::new("name").with_type("string"));
        class.add_property(PropertyDef::new("age").with_type("int"));
        class.add_method(MethodDef::new("greet"));

        assert_eq!(class.properties[0].name, "name");
        assert_eq!(class.properties[1].member_type.token(), &TypeToken::Int);
        assert!(class.methods[0].returns_void());
    }

    #[test]
    fn test_deserialize_editor_json() {
        let json = r#"{
            "key": 1,
            "name": "BankAccount",
            "properties": [
                { "name": "owner", "type": "String", "visibility": "public" },
                { "name": "balance", "type": "Currency", "visibility": "public" }
            ],
            "methods": [
                { "name": "deposit", "type": "void", "visibility": "public",
                  "parameters": [{ "name": "amount", "type": "Currency" }] }
            ],
            "size": "160 120"
        }"#;
        let class: ClassDef = serde_json::from_str(json).unwrap();

        assert_eq!(class.properties[0].member_type.token(), &TypeToken::String);
        assert_eq!(class.properties[0].member_type.as_str(), "String");
        assert_eq!(
            class.properties[1].member_type.token(),
            &TypeToken::Custom("Currency".to_string())
        );
        assert_eq!(class.properties[0].visibility, Visibility::Public);
        assert_eq!(class.methods[0].parameters[0].name, "amount");
    }

    #[test]
    fn test_missing_members_default_to_empty() {
        let class: ClassDef = serde_json::from_str(r#"{ "key": 5, "name": "Empty" }"#).unwrap();
        assert!(class.properties.is_empty());
        assert!(class.methods.is_empty());

        let prop: PropertyDef = serde_json::from_str(r#"{ "name": "x" }"#).unwrap();
        assert!(!prop.visibility.is_known());
        assert_eq!(prop.member_type.token(), &TypeToken::Custom(String::new()));
    }

    #[test]
    fn test_null_type_and_visibility_decode_as_missing() {
        let json = r#"{
            "key": 1,
            "name": "A",
            "properties": [{ "name": "x", "type": null, "visibility": null }],
            "methods": [
                { "name": "run", "type": null, "visibility": null,
                  "parameters": [{ "name": "p", "type": null }] }
            ]
        }"#;
        let class: ClassDef = serde_json::from_str(json).unwrap();

        assert_eq!(class.properties[0].member_type, TypeName::default());
        assert!(!class.properties[0].visibility.is_known());
        assert!(!class.methods[0].returns_void());
        assert_eq!(class.methods[0].parameters[0].param_type.as_str(), "");
    }
}
