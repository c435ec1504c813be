//! PHP source emitter

use tracing::{debug, span, trace, Level};

use super::syntax::{method_visibility, nullable, property_visibility, value_type};
use crate::annotator;
use crate::core::{capitalize, CodeWriter, EmitConfig, Emitter, Target, TypeName};
use crate::model::{ClassDef, ClassModel, MethodDef, PropertyDef};
use crate::resolver::InheritanceMap;
use crate::type_map::map_type;

/// PHP source emitter
pub struct PhpEmitter {
    config: EmitConfig,
}

impl PhpEmitter {
    pub fn new() -> Self {
        Self::with_config(EmitConfig::default())
    }

    pub fn with_config(config: EmitConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EmitConfig {
        &self.config
    }

    fn php_type(&self, name: &TypeName) -> String {
        map_type(name.token(), Target::Php)
    }

    fn php_value_type(&self, name: &TypeName) -> String {
        value_type(&self.php_type(name)).to_string()
    }

    fn docblock(&self, out: &mut CodeWriter, lines: &[String]) {
        if !self.config.doc_comments {
            return;
        }
        out.line("/**");
        for line in lines {
            out.line(format!(" * {}", line));
        }
        out.line(" */");
    }

    fn emit_class(&self, out: &mut CodeWriter, class: &ClassDef, parent: Option<&str>) {
        trace!(class = %class.name, parent = ?parent, "Emitting class");

        let mut doc = vec![format!("Class {}", class.name)];
        if let Some(parent) = parent {
            doc.push(format!("@extends {}", parent));
        }
        self.docblock(out, &doc);

        let header = match parent {
            Some(parent) => format!("class {} extends {} {{", class.name, parent),
            None => format!("class {} {{", class.name),
        };
        out.open(header);

        for prop in &class.properties {
            self.emit_property(out, prop);
        }

        out.gap();
        self.emit_constructor(out, class, parent);

        if self.config.php_accessors {
            for prop in &class.properties {
                out.gap();
                self.emit_getter(out, prop);
                out.gap();
                self.emit_setter(out, prop);
            }
        }

        for method in &class.methods {
            out.gap();
            self.emit_method(out, method);
        }

        out.close("}");
    }

    fn emit_property(&self, out: &mut CodeWriter, prop: &PropertyDef) {
        if self.config.doc_comments {
            out.gap();
            out.line(format!("/** @var {} */", self.php_value_type(&prop.member_type)));
        }
        out.line(format!(
            "{} ${};",
            property_visibility(&prop.visibility),
            prop.name
        ));
    }

    fn emit_constructor(&self, out: &mut CodeWriter, class: &ClassDef, parent: Option<&str>) {
        let mut doc = vec!["Constructor".to_string()];
        doc.extend(
            class
                .properties
                .iter()
                .map(|p| format!("@param {} ${}", self.php_value_type(&p.member_type), p.name)),
        );
        self.docblock(out, &doc);

        let params = class
            .properties
            .iter()
            .map(|p| format!("{} ${} = null", nullable(&self.php_type(&p.member_type)), p.name))
            .collect::<Vec<_>>()
            .join(", ");

        out.open(format!("public function __construct({}) {{", params));
        if parent.is_some() {
            out.line("parent::__construct();");
        }
        for prop in &class.properties {
            out.line(format!("$this->{0} = ${0};", prop.name));
        }
        out.close("}");
    }

    fn emit_getter(&self, out: &mut CodeWriter, prop: &PropertyDef) {
        let php_type = self.php_value_type(&prop.member_type);
        self.docblock(
            out,
            &[format!("Get {}", prop.name), format!("@return {}", php_type)],
        );
        out.open(format!(
            "public function get{}(): {} {{",
            capitalize(&prop.name),
            php_type
        ));
        out.line(format!("return $this->{};", prop.name));
        out.close("}");
    }

    fn emit_setter(&self, out: &mut CodeWriter, prop: &PropertyDef) {
        let php_type = self.php_value_type(&prop.member_type);
        self.docblock(
            out,
            &[
                format!("Set {}", prop.name),
                format!("@param {} ${}", php_type, prop.name),
                "@return self".to_string(),
            ],
        );
        out.open(format!(
            "public function set{}({} ${}): self {{",
            capitalize(&prop.name),
            php_type,
            prop.name
        ));
        out.line(format!("$this->{0} = ${0};", prop.name));
        out.line("return $this;");
        out.close("}");
    }

    fn emit_method(&self, out: &mut CodeWriter, method: &MethodDef) {
        let return_type = self.php_type(&method.member_type);

        let mut doc = vec![format!("{} method", method.name)];
        doc.extend(
            method
                .parameters
                .iter()
                .map(|p| format!("@param {} ${}", self.php_value_type(&p.param_type), p.name)),
        );
        doc.push(format!("@return {}", return_type));
        self.docblock(out, &doc);

        let params = method
            .parameters
            .iter()
            .map(|p| format!("{} ${}", self.php_value_type(&p.param_type), p.name))
            .collect::<Vec<_>>()
            .join(", ");

        out.open(format!(
            "{} function {}({}): {} {{",
            method_visibility(&method.visibility),
            method.name,
            params,
            return_type
        ));
        out.line("// TODO: Implement method");
        if !method.returns_void() {
            out.line("return null; // Placeholder return");
        }
        out.close("}");
    }
}

impl Default for PhpEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter for PhpEmitter {
    fn emit(&self, model: &ClassModel) -> String {
        let emit_span = span!(Level::DEBUG, "emit_php", classes = model.class_count());
        let _enter = emit_span.enter();

        let inheritance = InheritanceMap::resolve(model);
        let mut out = CodeWriter::new(self.config.indent);
        out.line("<?php");

        for class in model.classes() {
            out.gap();
            self.emit_class(&mut out, class, inheritance.parent_of(&class.name));
        }

        if self.config.relationship_trailer {
            out.gap();
            annotator::write_trailer(model, Target::Php, &mut out);
        }

        let code = out.finish();
        debug!(output_len = code.len(), "PHP emission completed");
        code
    }

    fn target(&self) -> Target {
        Target::Php
    }

    fn name(&self) -> &'static str {
        "php"
    }
}
