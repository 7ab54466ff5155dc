//! Converts generated call fragments into fluent configuration source text.

use model::{core::value::Value, fragment::MethodCallCodeFragment};

pub mod model_builder;

const INDENT: &str = "    ";

/// Anything that can be written as source text.
pub trait Render {
    fn render(&self, renderer: &mut Renderer);
}

/// Accumulates generated source text and tracks indentation.
#[derive(Debug, Default)]
pub struct Renderer {
    pub code: String,
    depth: usize,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the renderer and returns the generated text.
    pub fn finish(self) -> String {
        self.code
    }

    pub fn indent(&mut self) {
        self.depth += 1;
    }

    pub fn dedent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Starts a new line at the current indentation.
    pub fn start_line(&mut self) {
        for _ in 0..self.depth {
            self.code.push_str(INDENT);
        }
    }

    pub fn end_line(&mut self) {
        self.code.push('\n');
    }

    pub fn line(&mut self, text: &str) {
        self.start_line();
        self.code.push_str(text);
        self.end_line();
    }

    /// Writes `target` followed by the chained calls and a closing `;`.
    pub fn statement<'c>(
        &mut self,
        target: &str,
        calls: impl IntoIterator<Item = &'c MethodCallCodeFragment>,
    ) {
        self.start_line();
        self.code.push_str(target);
        for call in calls {
            call.render(self);
        }
        self.code.push(';');
        self.end_line();
    }

    pub fn render_list<T: Render>(&mut self, items: &[T]) {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.code.push_str(", ");
            }
            item.render(self);
        }
    }

    pub fn render_string_literal(&mut self, s: &str) {
        self.code.push('"');
        for ch in s.chars() {
            match ch {
                '"' => self.code.push_str("\\\""),
                '\\' => self.code.push_str("\\\\"),
                '\n' => self.code.push_str("\\n"),
                '\r' => self.code.push_str("\\r"),
                '\t' => self.code.push_str("\\t"),
                other if other.is_control() => {
                    self.code.push_str(&format!("\\u{:04x}", other as u32));
                }
                other => self.code.push(other),
            }
        }
        self.code.push('"');
    }

    /// Writes a floating point literal in plain decimal form, always with a
    /// decimal point. Non-finite values use the `double` constants.
    pub fn render_float(&mut self, v: f64) {
        if v.is_nan() {
            self.code.push_str("double.NaN");
        } else if v.is_infinite() {
            self.code.push_str(if v > 0.0 {
                "double.PositiveInfinity"
            } else {
                "double.NegativeInfinity"
            });
        } else {
            let text = v.to_string();
            self.code.push_str(&text);
            if !text.contains('.') {
                self.code.push_str(".0");
            }
        }
    }
}

impl Render for Value {
    fn render(&self, r: &mut Renderer) {
        match self {
            Value::Null => r.code.push_str("null"),
            Value::Bool(v) => r.code.push_str(if *v { "true" } else { "false" }),
            Value::Int(v) => r.code.push_str(&v.to_string()),
            Value::Uint(v) => r.code.push_str(&v.to_string()),
            Value::Float(v) => r.render_float(*v),
            Value::String(v) => r.render_string_literal(v),
            Value::Array(items) => {
                r.code.push_str("new[] { ");
                r.render_list(items);
                r.code.push_str(" }");
            }
            Value::Object(entries) => {
                r.code.push_str("new Dictionary<string, object> { ");
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        r.code.push_str(", ");
                    }
                    r.code.push('[');
                    r.render_string_literal(key);
                    r.code.push_str("] = ");
                    value.render(r);
                }
                r.code.push_str(" }");
            }
        }
    }
}

impl Render for String {
    fn render(&self, r: &mut Renderer) {
        r.render_string_literal(self);
    }
}

impl Render for MethodCallCodeFragment {
    fn render(&self, r: &mut Renderer) {
        r.code.push('.');
        r.code.push_str(self.method());
        r.code.push('(');
        r.render_list(self.arguments());
        r.code.push(')');
    }
}

#[cfg(test)]
mod tests {
    use super::{Render, Renderer};
    use model::{core::value::Value, fragment::MethodCallCodeFragment};

    fn render(item: &impl Render) -> String {
        let mut renderer = Renderer::new();
        item.render(&mut renderer);
        renderer.finish()
    }

    #[test]
    fn test_render_literals() {
        assert_eq!(render(&Value::from(r#"say "hi" \ bye"#)), r#""say \"hi\" \\ bye""#);
        assert_eq!(render(&Value::Float(2.0)), "2.0");
        assert_eq!(render(&Value::Null), "null");
        assert_eq!(render(&Value::from(vec![1i64, 2])), "new[] { 1, 2 }");
    }

    #[test]
    fn test_render_floats() {
        assert_eq!(render(&Value::Float(1e20)), "100000000000000000000.0");
        assert_eq!(render(&Value::Float(1e-7)), "0.0000001");
        assert_eq!(render(&Value::Float(-0.5)), "-0.5");
        assert_eq!(render(&Value::Float(f64::NAN)), "double.NaN");
        assert_eq!(render(&Value::Float(f64::INFINITY)), "double.PositiveInfinity");
        assert_eq!(render(&Value::Float(f64::NEG_INFINITY)), "double.NegativeInfinity");
    }

    #[test]
    fn test_render_unsigned_and_object() {
        assert_eq!(render(&Value::Uint(u64::MAX)), "18446744073709551615");

        let value: Value = serde_json::from_str(r#"{"b": [1], "a": "x"}"#).unwrap();
        assert_eq!(
            render(&value),
            r#"new Dictionary<string, object> { ["a"] = "x", ["b"] = new[] { 1 } }"#
        );
    }

    #[test]
    fn test_render_control_characters() {
        assert_eq!(render(&Value::from("a\u{1b}b\u{0}")), r#""a\u001bb\u0000""#);
        assert_eq!(render(&Value::from("é\n")), r#""é\n""#);
    }

    #[test]
    fn test_render_fragment() {
        let fragment = MethodCallCodeFragment::new(
            "HasAnnotation",
            vec![Value::from("Vendor:Hint"), Value::Bool(true)],
        );
        assert_eq!(render(&fragment), r#".HasAnnotation("Vendor:Hint", true)"#);
    }

    #[test]
    fn test_statement() {
        let calls = [
            MethodCallCodeFragment::new("HasColumnName", vec![Value::from("uid")]),
            MethodCallCodeFragment::without_arguments("UseIdentityAlwaysColumn"),
        ];
        let mut renderer = Renderer::new();
        renderer.indent();
        renderer.statement(r#"entity.Property("Id")"#, &calls);

        assert_eq!(
            renderer.finish(),
            "    entity.Property(\"Id\").HasColumnName(\"uid\").UseIdentityAlwaysColumn();\n"
        );
    }
}
