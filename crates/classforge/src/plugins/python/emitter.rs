//! Python source emitter

use tracing::{debug, span, trace, Level};

use super::syntax::{optional, str_template};
use crate::annotator;
use crate::core::{CodeWriter, EmitConfig, Emitter, Target, TypeName};
use crate::model::{ClassDef, ClassModel, MethodDef};
use crate::resolver::InheritanceMap;
use crate::type_map::map_type;

/// Import line at the top of every module
pub const TYPING_IMPORT: &str = "from typing import Any, List, Optional";

/// Python source emitter
pub struct PythonEmitter {
    config: EmitConfig,
}

impl PythonEmitter {
    pub fn new() -> Self {
        Self::with_config(EmitConfig::default())
    }

    pub fn with_config(config: EmitConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EmitConfig {
        &self.config
    }

    fn py_type(&self, name: &TypeName) -> String {
        map_type(name.token(), Target::Python)
    }

    fn emit_class(&self, out: &mut CodeWriter, class: &ClassDef, parent: Option<&str>) {
        trace!(class = %class.name, parent = ?parent, "Emitting class");

        let header = match parent {
            Some(parent) => format!("class {}({}):", class.name, parent),
            None => format!("class {}:", class.name),
        };
        out.open(header);

        if self.config.doc_comments {
            out.line("\"\"\"");
            match parent {
                Some(parent) => out.line(format!("{} class inheriting from {}", class.name, parent)),
                None => out.line(format!("{} class", class.name)),
            }
            out.line("\"\"\"");
        }

        out.gap();
        self.emit_init(out, class, parent);

        for method in &class.methods {
            out.gap();
            self.emit_method(out, method);
        }

        if parent.is_some() {
            out.gap();
            out.open("def __str__(self) -> str:");
            out.line(format!(
                "return f\"{}\"",
                str_template(&class.name, class.properties.iter().map(|p| p.name.as_str()))
            ));
            out.dedent();
        }

        out.dedent();
    }

    fn emit_init(&self, out: &mut CodeWriter, class: &ClassDef, parent: Option<&str>) {
        let params: String = class
            .properties
            .iter()
            .map(|p| {
                format!(
                    ", {}: {} = None",
                    p.name,
                    optional(&self.py_type(&p.member_type))
                )
            })
            .collect();

        out.open(format!("def __init__(self{}):", params));
        if parent.is_some() {
            out.line("super().__init__()");
        }
        for prop in &class.properties {
            out.line(format!("self.{0} = {0}", prop.name));
        }
        if parent.is_none() && class.properties.is_empty() {
            out.line("pass");
        }
        out.dedent();
    }

    fn emit_method(&self, out: &mut CodeWriter, method: &MethodDef) {
        let return_type = self.py_type(&method.member_type);
        let params: String = method
            .parameters
            .iter()
            .map(|p| format!(", {}: {}", p.name, self.py_type(&p.param_type)))
            .collect();

        out.open(format!(
            "def {}(self{}) -> {}:",
            method.name, params, return_type
        ));

        if self.config.doc_comments {
            out.line("\"\"\"");
            out.line(format!("{} method", method.name));
            if !method.parameters.is_empty() {
                out.blank();
                out.line("Args:");
                out.indent();
                for param in &method.parameters {
                    out.line(format!("{}: {} parameter", param.name, param.param_type));
                }
                out.dedent();
            }
            out.blank();
            out.line("Returns:");
            out.indent();
            out.line(&return_type);
            out.dedent();
            out.line("\"\"\"");
        }

        out.line("# TODO: Implement method");
        if !method.returns_void() {
            out.line("return None  # Placeholder return");
        }
        out.dedent();
    }
}

impl Default for PythonEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter for PythonEmitter {
    fn emit(&self, model: &ClassModel) -> String {
        let emit_span = span!(Level::DEBUG, "emit_python", classes = model.class_count());
        let _enter = emit_span.enter();

        let inheritance = InheritanceMap::resolve(model);
        let mut out = CodeWriter::new(self.config.indent);
        out.line(TYPING_IMPORT);

        for class in model.classes() {
            out.gap();
            out.blank();
            self.emit_class(&mut out, class, inheritance.parent_of(&class.name));
        }

        if self.config.relationship_trailer {
            out.gap();
            out.blank();
            annotator::write_trailer(model, Target::Python, &mut out);
        }

        let code = out.finish();
        debug!(output_len = code.len(), "Python emission completed");
        code
    }

    fn target(&self) -> Target {
        Target::Python
    }

    fn name(&self) -> &'static str {
        "python"
    }
}
