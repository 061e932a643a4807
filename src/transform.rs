//! SVG to component-module transformation
//!
//! Three passes per icon, mirroring the toolchain the package build wraps:
//! `optimize` strips XML noise from the source document, `transpile` renders
//! a React component module directly in the requested module convention, and
//! `minify` compacts the generated text. Failures at any stage surface as a
//! transform error naming the offending source file.

use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};

use crate::error::{GlyphpackError, GlyphpackResult};
use crate::models::{IconAsset, OutputFormat};

/// Attribute value rewritten to the caller's color prop
const COLOR_PLACEHOLDER: &str = "#000000";

/// A parsed SVG element subtree
#[derive(Debug, Clone, PartialEq)]
pub struct SvgNode {
    /// Element name (e.g. `svg`, `path`)
    pub name: String,
    /// Attributes in document order
    pub attributes: Vec<(String, String)>,
    /// Child elements in document order
    pub children: Vec<SvgNode>,
}

fn xml_error(file: &Path, error: impl std::fmt::Display) -> GlyphpackError {
    GlyphpackError::transform(file, error.to_string())
}

/// Run the optimize, transpile and minify passes for one icon.
pub fn component_module(
    icon: &IconAsset,
    component: &str,
    size: u32,
    format: OutputFormat,
) -> GlyphpackResult<String> {
    let optimized = optimize(&icon.svg, &icon.source_path)?;
    let root = parse_svg(&optimized, &icon.source_path)?;
    Ok(minify(&transpile(&root, component, size, format)))
}

/// Strip the XML declaration, comments, doctype, processing instructions and
/// inter-tag whitespace from an SVG document.
pub fn optimize(svg: &str, file: &Path) -> GlyphpackResult<String> {
    let mut reader = Reader::from_str(svg);
    let mut writer = Writer::new(Vec::new());

    loop {
        match reader.read_event().map_err(|e| xml_error(file, e))? {
            Event::Eof => break,
            Event::Text(text) => {
                if text.iter().any(|b| !b.is_ascii_whitespace()) {
                    writer
                        .write_event(Event::Text(text))
                        .map_err(|e| xml_error(file, e))?;
                }
            }
            ev @ (Event::Start(_) | Event::End(_) | Event::Empty(_) | Event::CData(_)) => {
                writer.write_event(ev).map_err(|e| xml_error(file, e))?;
            }
            _ => {}
        }
    }

    String::from_utf8(writer.into_inner()).map_err(|e| xml_error(file, e))
}

/// Parse an optimized SVG document into an element tree.
///
/// Text content is dropped; icon sources carry geometry in attributes only.
pub fn parse_svg(svg: &str, file: &Path) -> GlyphpackResult<SvgNode> {
    let mut reader = Reader::from_str(svg);

    let mut stack: Vec<SvgNode> = Vec::new();
    let mut root: Option<SvgNode> = None;

    loop {
        match reader.read_event().map_err(|e| xml_error(file, e))? {
            Event::Eof => break,
            Event::Start(tag) => {
                stack.push(node_from_tag(&tag, file)?);
            }
            Event::Empty(tag) => {
                let node = node_from_tag(&tag, file)?;
                attach(&mut stack, &mut root, node);
            }
            Event::End(_) => {
                let node = stack
                    .pop()
                    .ok_or_else(|| GlyphpackError::transform(file, "unbalanced closing tag"))?;
                attach(&mut stack, &mut root, node);
            }
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(GlyphpackError::transform(file, "unclosed element"));
    }
    root.ok_or_else(|| GlyphpackError::transform(file, "no root element"))
}

fn attach(stack: &mut Vec<SvgNode>, root: &mut Option<SvgNode>, node: SvgNode) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None if root.is_none() => *root = Some(node),
        // Siblings after the root element are dropped.
        None => {}
    }
}

fn node_from_tag(tag: &BytesStart<'_>, file: &Path) -> GlyphpackResult<SvgNode> {
    let name = String::from_utf8_lossy(tag.name().as_ref()).into_owned();
    let mut attributes = Vec::new();
    for attr in tag.attributes() {
        let attr = attr.map_err(|e| xml_error(file, e))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| xml_error(file, e))?
            .into_owned();
        attributes.push((key, value));
    }
    Ok(SvgNode {
        name,
        attributes,
        children: Vec::new(),
    })
}

/// Render the component module for one parsed icon.
///
/// The module convention is a generation-time parameter: ESM and CJS are
/// symmetric code paths differing only in module prelude and export
/// statement, never a textual rewrite of one into the other.
pub fn transpile(root: &SvgNode, component: &str, size: u32, format: OutputFormat) -> String {
    let element = create_element(root, Some(size), 2);
    let prelude = match format {
        OutputFormat::Esm => "import * as React from \"react\";",
        OutputFormat::Cjs => "const React = require(\"react\");",
    };
    let epilogue = match format {
        OutputFormat::Esm => format!("export default {component};"),
        OutputFormat::Cjs => format!("module.exports = {component};"),
    };

    format!(
        "{prelude}\n\nfunction {component}(props) {{\n  return (\n{element}\n  );\n}}\n\n{epilogue}\n"
    )
}

/// Conservative whitespace-level minification of generated module text.
///
/// Generated lines always end at token boundaries where concatenation is
/// safe, so compaction is a plain join of trimmed lines.
pub fn minify(js: &str) -> String {
    let mut out = String::with_capacity(js.len());
    for line in js.lines() {
        out.push_str(line.trim());
    }
    out
}

fn create_element(node: &SvgNode, root_size: Option<u32>, indent: usize) -> String {
    let pad = "  ".repeat(indent);
    let props = props_expression(node, root_size);

    if node.children.is_empty() {
        return format!(
            "{pad}React.createElement({}, {props})",
            js_string(&node.name)
        );
    }

    let mut out = format!(
        "{pad}React.createElement(\n{pad}  {},\n{pad}  {props}",
        js_string(&node.name)
    );
    for child in &node.children {
        out.push_str(",\n");
        out.push_str(&create_element(child, None, indent + 1));
    }
    out.push('\n');
    out.push_str(&pad);
    out.push(')');
    out
}

/// Render an element's attribute set as a `createElement` props argument.
///
/// The root element takes the icon size as `width`/`height` (displacing any
/// source dimensions) and spreads the caller's props over the result.
fn props_expression(node: &SvgNode, root_size: Option<u32>) -> String {
    let mut entries: Vec<String> = Vec::new();
    for (name, value) in &node.attributes {
        let key = jsx_attribute_name(name);
        if root_size.is_some() && (key == "width" || key == "height") {
            continue;
        }
        let rendered = if value == COLOR_PLACEHOLDER {
            "props.color".to_string()
        } else {
            js_string(value)
        };
        entries.push(format!("{}: {rendered}", js_key(&key)));
    }

    match root_size {
        Some(size) => {
            entries.push(format!("width: {size}"));
            entries.push(format!("height: {size}"));
            format!("Object.assign({{ {} }}, props)", entries.join(", "))
        }
        None if entries.is_empty() => "null".to_string(),
        None => format!("{{ {} }}", entries.join(", ")),
    }
}

/// JSX attribute naming: kebab-case and namespaced attributes become
/// camelCase, `class` becomes `className`, `data-*` and `aria-*` keep their
/// literal names.
fn jsx_attribute_name(name: &str) -> String {
    if name == "class" {
        return "className".to_string();
    }
    if name.starts_with("data-") || name.starts_with("aria-") {
        return name.to_string();
    }

    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for c in name.chars() {
        if c == '-' || c == ':' {
            upper_next = true;
            continue;
        }
        if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

fn js_key(key: &str) -> String {
    let plain = !key.is_empty()
        && !key.starts_with(|c: char| c.is_ascii_digit())
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    if plain {
        key.to_string()
    } else {
        js_string(key)
    }
}

fn js_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const MINUS_SVG: &str = r#"<svg viewBox="0 0 24 24" fill="none"><path d="M5 12h14"/></svg>"#;

    fn file() -> PathBuf {
        PathBuf::from("icons/minus.svg")
    }

    fn icon(svg: &str) -> IconAsset {
        IconAsset::new("minus.svg", file(), svg)
    }

    // === Optimize ===

    #[test]
    fn test_optimize_strips_declaration_and_comments() {
        let svg = "<?xml version=\"1.0\"?>\n<!-- generated -->\n<svg>\n  <path d=\"M0 0\"/>\n</svg>";
        let optimized = optimize(svg, &file()).unwrap();

        assert_eq!(optimized, "<svg><path d=\"M0 0\"/></svg>");
    }

    #[test]
    fn test_optimize_keeps_attribute_order() {
        let svg = r#"<svg b="2" a="1"/>"#;
        let optimized = optimize(svg, &file()).unwrap();

        assert_eq!(optimized, r#"<svg b="2" a="1"/>"#);
    }

    // === Parse ===

    #[test]
    fn test_parse_builds_element_tree() {
        let root = parse_svg(MINUS_SVG, &file()).unwrap();

        assert_eq!(root.name, "svg");
        assert_eq!(
            root.attributes,
            vec![
                ("viewBox".to_string(), "0 0 24 24".to_string()),
                ("fill".to_string(), "none".to_string()),
            ]
        );
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.children[0].name, "path");
    }

    #[test]
    fn test_parse_nested_children() {
        let svg = r#"<svg><g fill="red"><circle r="4"/><circle r="2"/></g></svg>"#;
        let root = parse_svg(svg, &file()).unwrap();

        assert_eq!(root.children.len(), 1);
        assert_eq!(root.children[0].name, "g");
        assert_eq!(root.children[0].children.len(), 2);
    }

    #[test]
    fn test_parse_rejects_non_markup() {
        let result = parse_svg("this is not an svg", &file());

        assert!(matches!(result, Err(GlyphpackError::Transform { .. })));
    }

    #[test]
    fn test_parse_rejects_unclosed_element() {
        let result = parse_svg("<svg><path d=\"M0 0\">", &file());

        assert!(matches!(result, Err(GlyphpackError::Transform { .. })));
    }

    // === Attribute naming ===

    #[test]
    fn test_jsx_attribute_name_camel_cases() {
        assert_eq!(jsx_attribute_name("stroke-width"), "strokeWidth");
        assert_eq!(jsx_attribute_name("fill-rule"), "fillRule");
        assert_eq!(jsx_attribute_name("xlink:href"), "xlinkHref");
        assert_eq!(jsx_attribute_name("viewBox"), "viewBox");
    }

    #[test]
    fn test_jsx_attribute_name_special_cases() {
        assert_eq!(jsx_attribute_name("class"), "className");
        assert_eq!(jsx_attribute_name("data-slot"), "data-slot");
        assert_eq!(jsx_attribute_name("aria-hidden"), "aria-hidden");
    }

    // === Transpile ===

    #[test]
    fn test_transpile_root_takes_icon_size() {
        let root = parse_svg(r#"<svg width="16" height="16"/>"#, &file()).unwrap();
        let module = transpile(&root, "DotIcon", 24, OutputFormat::Esm);

        assert!(module.contains("width: 24"));
        assert!(module.contains("height: 24"));
        assert!(!module.contains("\"16\""));
    }

    #[test]
    fn test_transpile_spreads_props_on_root_only() {
        let root = parse_svg(MINUS_SVG, &file()).unwrap();
        let module = transpile(&root, "MinusIcon", 24, OutputFormat::Esm);

        assert_eq!(module.matches("Object.assign").count(), 1);
        assert!(module.contains("}, props)"));
    }

    #[test]
    fn test_transpile_rewrites_color_placeholder() {
        let root = parse_svg(r##"<svg><path fill="#000000" d="M0 0"/></svg>"##, &file()).unwrap();
        let module = transpile(&root, "DotIcon", 24, OutputFormat::Esm);

        assert!(module.contains("fill: props.color"));
        assert!(!module.contains("#000000"));
    }

    #[test]
    fn test_transpile_quotes_non_identifier_keys() {
        let root = parse_svg(r#"<svg data-slot="icon" class="h-6"/>"#, &file()).unwrap();
        let module = transpile(&root, "DotIcon", 24, OutputFormat::Esm);

        assert!(module.contains("\"data-slot\": \"icon\""));
        assert!(module.contains("className: \"h-6\""));
    }

    #[test]
    fn test_transpile_childless_element_gets_null_props() {
        let root = parse_svg("<svg><defs/></svg>", &file()).unwrap();
        let module = transpile(&root, "DotIcon", 24, OutputFormat::Esm);

        assert!(module.contains("React.createElement(\"defs\", null)"));
    }

    // === Minify ===

    #[test]
    fn test_minify_joins_trimmed_lines() {
        assert_eq!(minify("a;\n  b;\n\n  c;\n"), "a;b;c;");
    }

    // === Full pipeline ===

    #[test]
    fn test_component_module_esm() {
        let module =
            component_module(&icon(MINUS_SVG), "MinusIcon", 24, OutputFormat::Esm).unwrap();

        assert_eq!(
            module,
            "import * as React from \"react\";\
             function MinusIcon(props) {\
             return (\
             React.createElement(\
             \"svg\",\
             Object.assign({ viewBox: \"0 0 24 24\", fill: \"none\", width: 24, height: 24 }, props),\
             React.createElement(\"path\", { d: \"M5 12h14\" })\
             ));\
             }\
             export default MinusIcon;"
        );
    }

    #[test]
    fn test_component_module_cjs_has_no_esm_syntax() {
        let module =
            component_module(&icon(MINUS_SVG), "MinusIcon", 24, OutputFormat::Cjs).unwrap();

        assert!(module.starts_with("const React = require(\"react\");"));
        assert!(module.ends_with("module.exports = MinusIcon;"));
        assert!(!module.contains("export default"));
        assert!(!module.contains("import"));
    }

    #[test]
    fn test_component_module_formats_share_body() {
        let esm = component_module(&icon(MINUS_SVG), "MinusIcon", 24, OutputFormat::Esm).unwrap();
        let cjs = component_module(&icon(MINUS_SVG), "MinusIcon", 24, OutputFormat::Cjs).unwrap();

        let esm_body = esm
            .trim_start_matches("import * as React from \"react\";")
            .trim_end_matches("export default MinusIcon;");
        let cjs_body = cjs
            .trim_start_matches("const React = require(\"react\");")
            .trim_end_matches("module.exports = MinusIcon;");
        assert_eq!(esm_body, cjs_body);
    }

    #[test]
    fn test_component_module_rejects_broken_source() {
        let result = component_module(&icon("not an svg"), "BrokenIcon", 24, OutputFormat::Esm);

        assert!(matches!(result, Err(GlyphpackError::Transform { .. })));
    }

    #[test]
    fn test_component_module_is_deterministic() {
        let first = component_module(&icon(MINUS_SVG), "MinusIcon", 24, OutputFormat::Esm).unwrap();
        let second =
            component_module(&icon(MINUS_SVG), "MinusIcon", 24, OutputFormat::Esm).unwrap();

        assert_eq!(first, second);
    }
}
