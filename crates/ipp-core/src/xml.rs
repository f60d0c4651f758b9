//! XML Program Writer
//!
//! Renders a parsed `Program` to its XML document form. Rendering is a pure
//! function of the program and the configuration.

use crate::config::{ParserConfig, LANGUAGE};
use crate::isa::{Instruction, Operand, Program};

/// Escape text content
fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape an attribute value (always written double-quoted)
fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}

fn indent(output: &mut String, config: &ParserConfig, depth: usize) {
    output.push_str(&" ".repeat(config.indent_width * depth));
}

fn write_operand(output: &mut String, operand: &Operand, config: &ParserConfig) {
    indent(output, config, 2);
    let tag = format!("arg{}", operand.position);
    let kind = escape_attr(operand.kind.as_str());
    if operand.text.is_empty() {
        output.push_str(&format!("<{} type=\"{}\"/>\n", tag, kind));
    } else {
        output.push_str(&format!(
            "<{} type=\"{}\">{}</{}>\n",
            tag,
            kind,
            escape_text(&operand.text),
            tag
        ));
    }
}

fn write_instruction(output: &mut String, instruction: &Instruction, config: &ParserConfig) {
    indent(output, config, 1);
    let open = format!(
        "<instruction order=\"{}\" opcode=\"{}\"",
        instruction.order(),
        escape_attr(instruction.opcode().name())
    );
    if instruction.operands().is_empty() {
        output.push_str(&open);
        output.push_str("/>\n");
        return;
    }

    output.push_str(&open);
    output.push_str(">\n");
    for operand in instruction.operands() {
        write_operand(output, operand, config);
    }
    indent(output, config, 1);
    output.push_str("</instruction>\n");
}

/// Render `program` as an indented XML document
pub fn render(program: &Program, config: &ParserConfig) -> String {
    let mut output = String::new();

    if config.xml_declaration {
        output.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    }

    let root = format!("<program language=\"{}\"", escape_attr(LANGUAGE));
    if program.is_empty() {
        output.push_str(&root);
        output.push_str("/>\n");
        return output;
    }

    output.push_str(&root);
    output.push_str(">\n");
    for instruction in program.instructions() {
        write_instruction(&mut output, instruction, config);
    }
    output.push_str("</program>\n");

    output
}
