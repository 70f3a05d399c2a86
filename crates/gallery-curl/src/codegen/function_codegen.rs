//! Function code generator
//!
//! Emits the Python source of `customFunction` from a resolved request.

use super::literal::{double_quoted, repr_str, scalar, single_quoted};
use crate::binding::{FieldValue, ResolvedEntry, ResolvedNode, ResolvedPayload, ResolvedRequest};

/// Name of the generated function
pub const FUNCTION_NAME: &str = "customFunction";

const INDENT: &str = "    ";

const IMPORTS: [&str; 3] = ["import requests", "import json", "import traceback"];

/// Request execution and response handling, identical for every function
const EXECUTION_TAIL: [&str; 16] = [
    "        res_status = response.status_code",
    "        print(f\"\\nResponse status code: {res_status}\")",
    "",
    "        if res_status == 200:",
    "            res_json = response.json()",
    "            print(f\"\\nResponse: {res_json}\")",
    "            return res_json",
    "",
    "        else:",
    "            res_text = response.text",
    "            print(f\"Response text: {res_text}\")",
    "            return {\"message\": f\"request failed with status code: {res_status}\", \"error\": res_text}",
    "",
    "    except Exception as e:",
    "        print(f\"\\nError: {e}; \\nTraceback: {traceback.format_exc()}\")",
    "        return {\"message\": \"Error occured!\"}",
];

/// Function code generator
pub struct FunctionCodegen;

impl FunctionCodegen {
    /// Render the complete module text
    pub fn emit(request: &ResolvedRequest) -> String {
        let mut lines: Vec<String> = IMPORTS.iter().map(|s| s.to_string()).collect();
        lines.push(String::new());

        lines.push(format!(
            "def {}({}):",
            FUNCTION_NAME,
            Self::signature(&request.signature)
        ));

        // 1. URL
        lines.push(format!("{}url = {}", INDENT, double_quoted(&request.url)));

        // 2-3. Flat dictionaries
        Self::emit_flat_dict(&mut lines, "headers", &request.headers);
        Self::emit_flat_dict(&mut lines, "params", &request.params);

        // 4. Payload
        match &request.payload {
            ResolvedPayload::None => lines.push(format!("{}payload = None", INDENT)),
            ResolvedPayload::Raw(raw) => {
                lines.push(format!("{}payload = {}", INDENT, single_quoted(raw)))
            }
            ResolvedPayload::Tree(node) => {
                lines.push(format!(
                    "{}payload_dict = {}",
                    INDENT,
                    Self::render_node(node)
                ));
                lines.push(format!("{}payload = json.dumps(payload_dict)", INDENT));
            }
        }

        // 5. Execution
        lines.push(String::new());
        lines.push(format!("{}try:", INDENT));
        lines.push(format!(
            "{0}{0}response = requests.request({1}, url, headers=headers, params=params, data=payload)",
            INDENT,
            single_quoted(&request.method)
        ));
        lines.extend(EXECUTION_TAIL.iter().map(|s| s.to_string()));

        lines.join("\n")
    }

    /// `a: str, b: str`
    fn signature(names: &[String]) -> String {
        names
            .iter()
            .map(|name| format!("{}: str", name))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn emit_flat_dict(lines: &mut Vec<String>, name: &str, entries: &[ResolvedEntry]) {
        if entries.is_empty() {
            lines.push(format!("{}{} = {{}}", INDENT, name));
            return;
        }

        lines.push(format!("{}{} = {{", INDENT, name));
        for entry in entries {
            let value = match &entry.value {
                FieldValue::Param(param) => param.clone(),
                FieldValue::Literal(literal) => single_quoted(literal),
            };
            lines.push(format!(
                "{0}{0}{1}: {2},",
                INDENT,
                single_quoted(&entry.key),
                value
            ));
        }
        lines.push(format!("{}}}", INDENT));
    }

    /// Composite literal with parameter references left unquoted
    fn render_node(node: &ResolvedNode) -> String {
        match node {
            ResolvedNode::Object(entries) => {
                let items: Vec<String> = entries
                    .iter()
                    .map(|(key, value)| format!("{}: {}", repr_str(key), Self::render_node(value)))
                    .collect();
                format!("{{{}}}", items.join(", "))
            }
            ResolvedNode::Array(items) => {
                let items: Vec<String> = items.iter().map(Self::render_node).collect();
                format!("[{}]", items.join(", "))
            }
            ResolvedNode::Param(name) => name.clone(),
            ResolvedNode::Scalar(value) => scalar(value),
        }
    }
}
