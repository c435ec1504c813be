//! Generation pipeline
//!
//! The generator ties the pieces together:
//! JSON → ClassModel → validation → Emitter → source text

use tracing::{debug, info, span, trace, warn, Level};

use crate::core::{EmitConfig, Emitter, GenerateError, Target};
use crate::model::{ClassModel, RelationshipDef};
use crate::plugins::java::JavaEmitter;
use crate::plugins::php::PhpEmitter;
use crate::plugins::python::PythonEmitter;
use crate::resolver::{InheritanceMap, ParentConflict};

/// Findings about a model that do not stop generation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelReport {
    /// Relationships with a missing endpoint; left out of every output
    pub dangling: Vec<RelationshipDef>,
    /// Generalizations dropped because the child already had a parent
    pub conflicts: Vec<ParentConflict>,
}

impl ModelReport {
    pub fn is_clean(&self) -> bool {
        self.dangling.is_empty() && self.conflicts.is_empty()
    }
}

/// Code generator for every supported target
///
/// Holds the shared [`EmitConfig`] and builds the matching emitter on
/// demand, so one generator can serve all targets.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: EmitConfig,
}

impl Generator {
    pub fn new() -> Self {
        Self::with_config(EmitConfig::default())
    }

    pub fn with_config(config: EmitConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EmitConfig {
        &self.config
    }

    /// Build the emitter for `target` using this generator's config
    pub fn emitter_for(&self, target: Target) -> Box<dyn Emitter> {
        match target {
            Target::Java => Box::new(JavaEmitter::with_config(self.config)),
            Target::Php => Box::new(PhpEmitter::with_config(self.config)),
            Target::Python => Box::new(PythonEmitter::with_config(self.config)),
        }
    }

    /// Validate the model, then emit it for `target`
    pub fn generate(&self, model: &ClassModel, target: Target) -> Result<String, GenerateError> {
        let generate_span = span!(
            Level::INFO,
            "generate",
            language = %target,
            classes = model.class_count(),
            relationships = model.relationship_count()
        );
        let _enter = generate_span.enter();

        info!("Starting code generation");

        let validate_span = span!(Level::DEBUG, "pipeline_validate");
        let validate_enter = validate_span.enter();
        if let Err(err) = model.validate() {
            warn!(error = %err, "Model validation failed");
            return Err(err);
        }
        debug!("Model validated");
        drop(validate_enter);

        let code = self.generate_unchecked(model, target);
        info!(output_len = code.len(), "Code generation completed");
        Ok(code)
    }

    /// Emit without validating
    ///
    /// Duplicate names make the inheritance lookup ambiguous; the output is
    /// still produced but may attach a parent to every class sharing a name.
    pub fn generate_unchecked(&self, model: &ClassModel, target: Target) -> String {
        let emit_span = span!(Level::DEBUG, "pipeline_emit", language = %target);
        let _enter = emit_span.enter();

        let emitter = self.emitter_for(target);
        trace!(emitter = emitter.name(), "Selected emitter");
        emitter.emit(model)
    }

    /// Decode a JSON model document and generate code from it
    pub fn generate_json(&self, input: &str, target: Target) -> Result<String, GenerateError> {
        let parse_span = span!(Level::DEBUG, "pipeline_parse", input_len = input.len());
        let parse_enter = parse_span.enter();
        let model = ClassModel::from_json(input)?;
        debug!(
            classes = model.class_count(),
            relationships = model.relationship_count(),
            "Model decoded"
        );
        drop(parse_enter);

        self.generate(&model, target)
    }

    /// Collect the non-fatal findings for a model
    pub fn inspect(&self, model: &ClassModel) -> ModelReport {
        let report = ModelReport {
            dangling: model.dangling_relationships().cloned().collect(),
            conflicts: InheritanceMap::resolve(model).conflicts().to_vec(),
        };
        debug!(
            dangling = report.dangling.len(),
            conflicts = report.conflicts.len(),
            "Model inspected"
        );
        report
    }
}
