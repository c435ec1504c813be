//! Edge case tests for resolution, fallbacks and the relationship trailer

use classforge::prelude::*;
use classforge::{generate, generate_with_config};

#[test]
fn test_empty_model() {
    let model = ClassModel::new();
    assert_eq!(generate(&model, Target::Java).unwrap(), "// Relationships:\n");
    assert_eq!(
        generate(&model, Target::Php).unwrap(),
        "<?php\n\n// Relationships:\n"
    );
    assert_eq!(
        generate(&model, Target::Python).unwrap(),
        "from typing import Any, List, Optional\n\n\n# Relationships:\n"
    );
}

#[test]
fn test_first_parent_wins() {
    let model = ClassModel::new()
        .with_class(ClassDef::new(1, "Pet"))
        .with_class(ClassDef::new(2, "Animal"))
        .with_class(ClassDef::new(3, "Dog"))
        .with_relationship(RelationshipDef::new(3, 1, "generalization"))
        .with_relationship(RelationshipDef::new(3, 2, "generalization"));

    let java = generate(&model, Target::Java).unwrap();
    assert!(java.contains("public class Dog extends Pet {"));
    assert!(!java.contains("extends Animal"));

    // Both relationships still show up in the trailer
    assert!(java.contains("// Dog generalization Pet\n"));
    assert!(java.contains("// Dog generalization Animal\n"));

    let map = InheritanceMap::resolve(&model);
    assert_eq!(map.conflicts().len(), 1);
    assert_eq!(map.conflicts()[0].kept, "Pet");
}

#[test]
fn test_inheritance_cycle_is_emitted_as_written() {
    let model = ClassModel::new()
        .with_class(ClassDef::new(1, "A"))
        .with_class(ClassDef::new(2, "B"))
        .with_relationship(RelationshipDef::new(1, 2, "generalization"))
        .with_relationship(RelationshipDef::new(2, 1, "generalization"));

    let java = generate(&model, Target::Java).unwrap();
    assert!(java.contains("public class A extends B {"));
    assert!(java.contains("public class B extends A {"));
}

#[test]
fn test_self_generalization() {
    let model = ClassModel::new()
        .with_class(ClassDef::new(1, "Node"))
        .with_relationship(RelationshipDef::new(1, 1, "generalization"));
    let python = generate(&model, Target::Python).unwrap();
    assert!(python.contains("class Node(Node):"));
}

#[test]
fn test_inheritance_synonym_is_not_generalization() {
    let model = ClassModel::new()
        .with_class(ClassDef::new(1, "Animal"))
        .with_class(ClassDef::new(2, "Dog"))
        .with_relationship(RelationshipDef::new(2, 1, "inheritance"));

    let java = generate(&model, Target::Java).unwrap();
    assert!(!java.contains("extends"));
    assert!(java.contains("// Dog inheritance Animal\n"));
}

#[test]
fn test_relationship_type_matches_exactly() {
    let model = ClassModel::new()
        .with_class(ClassDef::new(1, "Animal"))
        .with_class(ClassDef::new(2, "Dog"))
        .with_relationship(RelationshipDef::new(2, 1, "Generalization"));

    let php = generate(&model, Target::Php).unwrap();
    assert!(php.contains("class Dog {"));
    assert!(!php.contains("extends"));
    assert!(php.ends_with("// Dog Generalization Animal\n"));
}

#[test]
fn test_trailer_prints_relationship_type_as_written() {
    let model = ClassModel::new()
        .with_class(ClassDef::new(1, "A"))
        .with_class(ClassDef::new(2, "B"))
        .with_relationship(RelationshipDef::new(1, 2, "Association"))
        .with_relationship(RelationshipDef::new(2, 1, " aggregation "));

    let java = generate(&model, Target::Java).unwrap();
    assert!(java.ends_with("// A Association B\n// B  aggregation  A\n"));

    let python = generate(&model, Target::Python).unwrap();
    assert!(python.ends_with("# A Association B\n# B  aggregation  A\n"));
}

#[test]
fn test_null_member_fields_fall_back() {
    let json = r#"{
        "classes": [
            { "key": 1, "name": "A",
              "properties": [ { "name": "x", "type": null, "visibility": null } ],
              "methods": [
                { "name": "run", "type": null, "visibility": null,
                  "parameters": [ { "name": "p", "type": null } ] }
              ] },
            { "key": 2, "name": "B" }
        ],
        "relationships": [ { "from": 1, "to": 2, "type": null } ]
    }"#;

    let java = classforge::generate_json(json, Target::Java).unwrap();
    assert!(java.contains("    private Object x;\n"));
    assert!(java.contains("    Object run(Object p) {\n"));
    assert!(java.ends_with("// A  B\n"));

    let php = classforge::generate_json(json, Target::Php).unwrap();
    assert!(php.contains("public function __construct(mixed $x = null) {"));
    assert!(php.contains("    public function run(mixed $p): mixed {\n"));

    let python = classforge::generate_json(json, Target::Python).unwrap();
    assert!(python.contains("def __init__(self, x: Any = None):"));
    assert!(python.contains("def run(self, p: Any) -> Any:"));
}

#[test]
fn test_python_docstring_echoes_parameter_type() {
    let model = ClassModel::new().with_class(
        ClassDef::new(1, "Greeter").with_method(
            MethodDef::new("greet")
                .with_visibility("public")
                .with_parameter(ParameterDef::new("who", "String"))
                .with_parameter(ParameterDef::new("times", "Count")),
        ),
    );

    let python = generate(&model, Target::Python).unwrap();
    assert!(python.contains("def greet(self, who: str, times: Any) -> None:"));
    assert!(python.contains("            who: String parameter\n"));
    assert!(python.contains("            times: Count parameter\n"));
}

#[test]
fn test_void_property_in_php_uses_mixed() {
    let model = ClassModel::new().with_class(
        ClassDef::new(1, "Slot")
            .with_property(PropertyDef::new("value").with_type("void").with_visibility("private"))
            .with_method(
                MethodDef::new("fill")
                    .with_visibility("public")
                    .with_parameter(ParameterDef::new("value", "void")),
            ),
    );

    let php = generate(&model, Target::Php).unwrap();
    assert!(php.contains("/** @var mixed */"));
    assert!(php.contains("public function __construct(mixed $value = null) {"));
    assert!(php.contains("public function fill(mixed $value): void {"));
    assert!(!php.contains("?void"));

    let accessors = generate_with_config(
        &model,
        Target::Php,
        EmitConfig::new().with_php_accessors(true),
    )
    .unwrap();
    assert!(accessors.contains("public function getValue(): mixed {"));
    assert!(accessors.contains("public function setValue(mixed $value): self {"));
}

#[test]
fn test_unknown_types_fall_back_per_target() {
    let model = ClassModel::new().with_class(
        ClassDef::new(1, "Wallet")
            .with_property(PropertyDef::new("balance").with_type("Money").with_visibility("private"))
            .with_property(PropertyDef::new("note").with_visibility("private")),
    );

    let java = generate(&model, Target::Java).unwrap();
    assert!(java.contains("private Money balance;"));
    assert!(java.contains("private Object note;"));

    let php = generate(&model, Target::Php).unwrap();
    assert!(php.contains("mixed $balance = null, mixed $note = null"));

    let python = generate(&model, Target::Python).unwrap();
    assert!(python.contains("balance: Any = None, note: Any = None"));
}

#[test]
fn test_unknown_visibility_falls_back() {
    let model = ClassModel::new().with_class(
        ClassDef::new(1, "Box")
            .with_property(PropertyDef::new("size").with_type("int").with_visibility("internal"))
            .with_method(MethodDef::new("open").with_visibility("internal")),
    );

    let java = generate(&model, Target::Java).unwrap();
    assert!(java.contains("    private int size;\n"));
    assert!(java.contains("    void open() {\n"));

    let php = generate(&model, Target::Php).unwrap();
    assert!(php.contains("    private $size;\n"));
    assert!(php.contains("    public function open(): void {\n"));
}

#[test]
fn test_package_visibility_in_java() {
    let model = ClassModel::new().with_class(
        ClassDef::new(1, "Box")
            .with_property(PropertyDef::new("size").with_type("int").with_visibility("~")),
    );
    let java = generate(&model, Target::Java).unwrap();
    assert!(java.contains("    int size;\n"));
}

#[test]
fn test_duplicate_relationships_are_kept() {
    let model = ClassModel::new()
        .with_class(ClassDef::new(1, "A"))
        .with_class(ClassDef::new(2, "B"))
        .with_relationship(RelationshipDef::new(1, 2, "dependency"))
        .with_relationship(RelationshipDef::new(1, 2, "dependency"));

    let java = generate(&model, Target::Java).unwrap();
    assert_eq!(java.matches("// A dependency B\n").count(), 2);
}

#[test]
fn test_empty_multiplicity_is_omitted() {
    let model = ClassModel::new()
        .with_class(ClassDef::new(1, "A"))
        .with_class(ClassDef::new(2, "B"))
        .with_relationship(RelationshipDef::new(1, 2, "aggregation").with_multiplicity(""));

    let python = generate(&model, Target::Python).unwrap();
    assert!(python.ends_with("# A aggregation B\n"));
}

#[test]
fn test_class_order_follows_input() {
    let model = ClassModel::new()
        .with_class(ClassDef::new(9, "Zebra"))
        .with_class(ClassDef::new(1, "Ant"));
    let java = generate(&model, Target::Java).unwrap();
    let zebra = java.find("class Zebra").unwrap();
    let ant = java.find("class Ant").unwrap();
    assert!(zebra < ant);
}

#[test]
fn test_subclass_without_properties_in_python() {
    let model = ClassModel::new()
        .with_class(ClassDef::new(1, "Base"))
        .with_class(ClassDef::new(2, "Child"))
        .with_relationship(RelationshipDef::new(2, 1, "generalization"));

    let python = generate(&model, Target::Python).unwrap();
    assert!(python.contains("    def __init__(self):\n        pass\n"));
    assert!(python.contains("    def __init__(self):\n        super().__init__()\n"));
    assert!(python.contains("        return f\"Child()\"\n"));
}
