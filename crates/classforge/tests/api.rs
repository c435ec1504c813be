//! Public API tests covering the end-to-end scenarios

use classforge::prelude::*;
use classforge::{generate, generate_json, parse_model};

fn animal_dog() -> ClassModel {
    ClassModel::new()
        .with_class(
            ClassDef::new(1, "Animal").with_property(
                PropertyDef::new("name")
                    .with_type("string")
                    .with_visibility("private"),
            ),
        )
        .with_class(ClassDef::new(2, "Dog"))
        .with_relationship(RelationshipDef::new(2, 1, "generalization"))
}

#[test]
fn test_subclass_with_accessors_in_java() {
    let code = generate(&animal_dog(), Target::Java).unwrap();

    assert!(code.contains("public class Dog extends Animal"));
    assert!(code.contains("public class Animal {"));
    assert!(code.contains("private String name;"));
    assert!(code.contains("getName()"));
    assert!(code.contains("setName(String name)"));
}

#[test]
fn test_void_method_in_python() {
    let model = ClassModel::new().with_class(
        ClassDef::new(1, "Dog").with_method(
            MethodDef::new("bark")
                .with_type("void")
                .with_visibility("public"),
        ),
    );
    let code = generate(&model, Target::Python).unwrap();

    assert!(code.contains("def bark(self) -> None:"));
    assert!(code.contains("# TODO: Implement method"));
    assert!(!code.contains("return None"));
}

#[test]
fn test_multiplicity_in_trailer() {
    let model = ClassModel::new()
        .with_class(ClassDef::new(1, "Customer"))
        .with_class(ClassDef::new(2, "Order"))
        .with_relationship(RelationshipDef::new(1, 2, "association").with_multiplicity("1..*"));

    for target in Target::all() {
        let code = generate(&model, *target).unwrap();
        let line = code
            .lines()
            .find(|l| l.contains("Customer association Order"))
            .expect("trailer line should be present");
        assert!(line.ends_with("(Multiplicity: 1..*)"), "{}: {}", target, line);
    }
}

#[test]
fn test_dangling_generalization_is_ignored() {
    let model = ClassModel::new()
        .with_class(ClassDef::new(1, "Dog"))
        .with_relationship(RelationshipDef::new(1, 99, "generalization"));

    let java = generate(&model, Target::Java).unwrap();
    assert!(java.contains("public class Dog {"));
    assert!(!java.contains("extends"));
    assert!(java.ends_with("// Relationships:\n"));

    let php = generate(&model, Target::Php).unwrap();
    assert!(php.contains("class Dog {"));
    assert!(!php.contains("extends"));

    let python = generate(&model, Target::Python).unwrap();
    assert!(python.contains("class Dog:"));
    assert!(python.ends_with("# Relationships:\n"));
}

#[test]
fn test_generate_json_matches_generate() {
    let json = animal_dog().to_json_pretty().unwrap();
    for target in Target::all() {
        assert_eq!(
            generate_json(&json, *target).unwrap(),
            generate(&animal_dog(), *target).unwrap()
        );
    }
}

#[test]
fn test_parse_model_reads_editor_document() {
    let json = r#"{
        "classes": [
            {
                "key": 1,
                "name": "Calculator",
                "properties": [ { "name": "memory", "type": "double", "visibility": "-" } ],
                "methods": [
                    {
                        "name": "add",
                        "type": "double",
                        "visibility": "+",
                        "parameters": [
                            { "name": "a", "type": "double" },
                            { "name": "b", "type": "double" }
                        ]
                    }
                ]
            }
        ],
        "relationships": []
    }"#;
    let model = parse_model(json).unwrap();
    let class = model.get_class(1).unwrap();
    assert_eq!(class.properties[0].visibility, Visibility::Private);
    assert_eq!(class.methods[0].visibility, Visibility::Public);
    assert_eq!(class.methods[0].parameters.len(), 2);

    let java = generate(&model, Target::Java).unwrap();
    assert!(java.contains("private double memory;"));
    assert!(java.contains("public double add(double a, double b) {"));
}

#[test]
fn test_generator_and_emitters_agree() {
    let generator = Generator::new();
    let model = animal_dog();
    assert_eq!(
        generator.generate(&model, Target::Php).unwrap(),
        PhpEmitter::new().emit(&model)
    );
    assert_eq!(
        generator.generate(&model, Target::Java).unwrap(),
        JavaEmitter::new().emit(&model)
    );
    assert_eq!(
        generator.generate(&model, Target::Python).unwrap(),
        PythonEmitter::new().emit(&model)
    );
}

#[test]
fn test_inheritance_map_is_shared() {
    let map = InheritanceMap::resolve(&animal_dog());
    assert_eq!(map.parent_of("Dog"), Some("Animal"));
    assert!(map.conflicts().is_empty());
}
