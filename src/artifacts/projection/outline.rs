//! Built-in outline renderer
//!
//! Produces one line per stack block, scratchblocks style:
//!
//! ```text
//! when green flag clicked
//! repeat (10)
//! move (10) steps
//! end
//! ```
//!
//! Literals render as `(10)` or `[text]`, dropdowns as `[value v]`, nested
//! reporters as `(...)` and booleans as `<...>`. Blocks without a template
//! fall back to their opcode followed by their fields and inputs, with any
//! nested stacks rendered below them one level deeper.

use crate::artifacts::projection::opcode_table::{self, Shape};
use crate::artifacts::projection::{ProjectionError, ProjectionOptions, TextProjection};
use crate::artifacts::snapshot::block::{Block, InputValue};
use crate::artifacts::snapshot::project_snapshot::ProjectSnapshot;
use crate::artifacts::snapshot::script_handle::ScriptHandle;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([A-Za-z0-9_]+)\}").expect("placeholder regex is valid"));
static PROC_ARGUMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%[snb]").expect("procedure argument regex is valid"));

#[derive(Debug, Clone, Copy, Default)]
pub struct OutlineProjection;

impl TextProjection for OutlineProjection {
    fn project(
        &self,
        script: &ScriptHandle,
        snapshot: &ProjectSnapshot,
        options: &ProjectionOptions,
    ) -> Result<String, ProjectionError> {
        let mut renderer = Renderer::new(snapshot, options);
        renderer.render_stack(&script.id, 0)?;
        Ok(renderer.lines.join("\n"))
    }
}

struct Renderer<'s> {
    snapshot: &'s ProjectSnapshot,
    options: &'s ProjectionOptions,
    lines: Vec<String>,
    visited: HashSet<String>,
}

impl<'s> Renderer<'s> {
    fn new(snapshot: &'s ProjectSnapshot, options: &'s ProjectionOptions) -> Self {
        Renderer {
            snapshot,
            options,
            lines: Vec::new(),
            visited: HashSet::new(),
        }
    }

    fn visit(&mut self, id: &str) -> Result<&'s Block, ProjectionError> {
        let block = self
            .snapshot
            .get(id)
            .ok_or_else(|| ProjectionError::MissingBlock { id: id.to_string() })?;

        if !self.visited.insert(id.to_string()) {
            return Err(ProjectionError::Cycle { id: id.to_string() });
        }

        Ok(block)
    }

    fn push(&mut self, depth: usize, line: String) {
        self.lines
            .push(format!("{}{}", self.options.indent.repeat(depth), line));
    }

    fn render_stack(&mut self, start: &str, depth: usize) -> Result<(), ProjectionError> {
        let mut current = Some(start.to_string());

        while let Some(id) = current {
            let block = self.visit(&id)?;
            let line = self.render_statement(block)?;
            self.push(depth, line);

            match opcode_table::lookup(&block.opcode).map(|template| template.shape) {
                Some(shape @ (Shape::C | Shape::IfElse)) => {
                    if let Some(substack) = block.substack("SUBSTACK") {
                        self.render_stack(substack, depth + 1)?;
                    }
                    if shape == Shape::IfElse {
                        self.push(depth, "else".to_string());
                        if let Some(substack) = block.substack("SUBSTACK2") {
                            self.render_stack(substack, depth + 1)?;
                        }
                    }
                    self.push(depth, "end".to_string());
                }
                // Unknown C-blocks get no `end`: it would have no header to pair with
                None => {
                    for name in block.inputs.keys().filter(|name| name.starts_with("SUBSTACK")) {
                        if let Some(substack) = block.substack(name) {
                            self.render_stack(substack, depth + 1)?;
                        }
                    }
                }
                Some(_) => {}
            }

            current = block.next.clone();
        }

        Ok(())
    }

    fn render_statement(&mut self, block: &'s Block) -> Result<String, ProjectionError> {
        if block.opcode == "procedures_call" {
            return self.render_call(block);
        }

        match opcode_table::lookup(&block.opcode) {
            Some(template) => self.fill(block, template.text),
            None => self.render_unknown(block),
        }
    }

    /// Render a block plugged into an input slot
    fn render_reporter(&mut self, id: &str) -> Result<String, ProjectionError> {
        let block = self.visit(id)?;

        if block.opcode == "procedures_prototype" {
            let proccode = block.mutation_str("proccode").unwrap_or_default();
            return Ok(PROC_ARGUMENT
                .replace_all(proccode, |caps: &regex::Captures| match &caps[0] {
                    "%b" => "<>",
                    _ => "()",
                })
                .into_owned());
        }

        match opcode_table::lookup(&block.opcode) {
            Some(template) => {
                let text = self.fill(block, template.text)?;
                Ok(match template.shape {
                    Shape::Boolean => format!("<{text}>"),
                    _ => format!("({text})"),
                })
            }
            None if block.is_menu() || block.shadow => {
                Ok(format!("[{} v]", block.first_field().unwrap_or_default()))
            }
            None => Ok(format!("({})", self.render_unknown(block)?)),
        }
    }

    fn fill(&mut self, block: &'s Block, text: &str) -> Result<String, ProjectionError> {
        let mut rendered = String::with_capacity(text.len());
        let mut last = 0;

        for caps in PLACEHOLDER.captures_iter(text) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            rendered.push_str(&text[last..whole.start()]);
            rendered.push_str(&self.render_slot(block, name.as_str())?);
            last = whole.end();
        }
        rendered.push_str(&text[last..]);

        Ok(rendered)
    }

    fn render_slot(&mut self, block: &'s Block, name: &str) -> Result<String, ProjectionError> {
        if block.has_input(name) {
            return self.render_input(block.input(name), name);
        }

        match block.field(name) {
            Some(value) if block.opcode.starts_with("argument_reporter") => Ok(value),
            Some(value) => Ok(format!("[{value} v]")),
            None => Ok(empty_slot(name).to_string()),
        }
    }

    fn render_input(&mut self, input: InputValue<'s>, name: &str) -> Result<String, ProjectionError> {
        match input {
            InputValue::Block(id) => self.render_reporter(id),
            InputValue::Number(value) | InputValue::Variable(value) => Ok(format!("({value})")),
            InputValue::Text(value) => Ok(format!("[{value}]")),
            InputValue::Empty => Ok(empty_slot(name).to_string()),
        }
    }

    fn render_call(&mut self, block: &'s Block) -> Result<String, ProjectionError> {
        let proccode = block.mutation_str("proccode").unwrap_or_default();
        let argument_ids = block
            .mutation_str("argumentids")
            .and_then(|ids| serde_json::from_str::<Vec<String>>(ids).ok())
            .unwrap_or_default();

        let mut arguments = Vec::with_capacity(argument_ids.len());
        for id in &argument_ids {
            arguments.push(self.render_input(block.input(id), id)?);
        }

        let mut arguments = arguments.into_iter();
        Ok(PROC_ARGUMENT
            .replace_all(proccode, |caps: &regex::Captures| {
                arguments.next().unwrap_or_else(|| match &caps[0] {
                    "%b" => "<>".to_string(),
                    _ => "()".to_string(),
                })
            })
            .into_owned())
    }

    fn render_unknown(&mut self, block: &'s Block) -> Result<String, ProjectionError> {
        let mut parts = vec![block.opcode.clone()];

        for name in block.fields.keys() {
            if let Some(value) = block.field(name) {
                parts.push(format!("[{value} v]"));
            }
        }
        for name in block.inputs.keys() {
            if name.starts_with("SUBSTACK") {
                continue;
            }
            parts.push(self.render_input(block.input(name), name)?);
        }

        Ok(parts.join(" "))
    }
}

fn empty_slot(name: &str) -> &'static str {
    if name.starts_with("CONDITION") || name.starts_with("OPERAND") {
        "<>"
    } else {
        "()"
    }
}
