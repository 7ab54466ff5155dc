//! Renders a scaffolded model as `modelBuilder` configuration code.

use crate::{
    renderer::{Render, Renderer},
    scaffold::{ScaffoldedAnnotations, ScaffoldedEntityType, ScaffoldedModel},
};

const MODEL_BUILDER: &str = "modelBuilder";
const ENTITY: &str = "entity";

/// Renders `scaffolded` into fluent configuration text.
pub fn render_model(scaffolded: &ScaffoldedModel) -> String {
    let mut renderer = Renderer::new();
    scaffolded.render(&mut renderer);
    renderer.finish()
}

/// Renders `target("a", "b")`.
fn column_list(target: &str, columns: &[String]) -> String {
    let mut r = Renderer::new();
    r.code.push_str(target);
    r.code.push('(');
    r.render_list(columns);
    r.code.push(')');
    r.finish()
}

impl Render for ScaffoldedModel {
    fn render(&self, r: &mut Renderer) {
        let mut first = true;

        if !self.model.is_empty() {
            r.statement(MODEL_BUILDER, self.model.calls());
            first = false;
        }

        for entity in self.entity_types.iter().filter(|e| e.call_count() > 0) {
            if !first {
                r.end_line();
            }
            entity.render(r);
            first = false;
        }
    }
}

impl Render for ScaffoldedEntityType {
    fn render(&self, r: &mut Renderer) {
        let mut header = Renderer::new();
        header.code.push_str(MODEL_BUILDER);
        header.code.push_str(".Entity(");
        header.render_string_literal(&self.name);
        header.code.push_str(&format!(", {ENTITY} =>"));
        r.line(&header.finish());
        r.line("{");
        r.indent();

        let mut statements: Vec<(String, &ScaffoldedAnnotations)> = Vec::new();

        if !self.entity_type.is_empty() {
            statements.push((ENTITY.to_string(), &self.entity_type));
        }
        for key in &self.keys {
            statements.push((column_list(&format!("{ENTITY}.HasKey"), &key.properties), &key.calls));
        }
        for index in &self.indexes {
            statements.push((column_list(&format!("{ENTITY}.HasIndex"), &index.properties), &index.calls));
        }
        for property in &self.properties {
            statements.push((column_list(&format!("{ENTITY}.Property"), &property.properties), &property.calls));
        }
        for fk in &self.foreign_keys {
            let target = column_list(
                &format!(
                    "{}.WithMany().HasForeignKey",
                    column_list(&format!("{ENTITY}.HasOne"), std::slice::from_ref(&fk.principal_entity_type))
                ),
                &fk.properties,
            );
            statements.push((target, &fk.calls));
        }

        let mut first = true;
        for (target, calls) in statements.into_iter().filter(|(_, calls)| !calls.is_empty()) {
            if !first {
                r.end_line();
            }
            r.statement(&target, calls.calls());
            first = false;
        }

        r.dedent();
        r.line("});");
    }
}

#[cfg(test)]
mod tests {
    use super::render_model;
    use crate::{providers::Provider, scaffold::ModelScaffolder};
    use model::metadata::Model;

    #[test]
    fn test_render_model() {
        let model = Model::from_json(
            r#"{
                "annotations": [{ "name": "Relational:DefaultSchema", "value": "app" }],
                "entity_types": [
                    {
                        "name": "Blog",
                        "annotations": [{ "name": "Relational:TableName", "value": "blogs" }],
                        "properties": [
                            { "name": "Id" },
                            { "name": "Url", "annotations": [{ "name": "Relational:ColumnName", "value": "url" }] }
                        ],
                        "keys": [{ "properties": ["Id"], "primary": true, "annotations": [{ "name": "Relational:Name", "value": "pk_blogs" }] }]
                    },
                    {
                        "name": "Post",
                        "properties": [{ "name": "Id" }, { "name": "BlogId" }],
                        "foreign_keys": [{
                            "properties": ["BlogId"],
                            "principal_entity_type": "Blog",
                            "annotations": [{ "name": "Relational:Name", "value": "fk_posts_blogs" }]
                        }]
                    },
                    { "name": "Tag", "properties": [{ "name": "Id" }] }
                ]
            }"#,
        )
        .unwrap();

        let generator = Provider::Relational.generator();
        let text = render_model(&ModelScaffolder::new(&generator).scaffold(&model));

        let expected = r#"modelBuilder.HasDefaultSchema("app");

modelBuilder.Entity("Blog", entity =>
{
    entity.ToTable("blogs");

    entity.HasKey("Id").HasName("pk_blogs");

    entity.Property("Url").HasColumnName("url");
});

modelBuilder.Entity("Post", entity =>
{
    entity.HasOne("Blog").WithMany().HasForeignKey("BlogId").HasConstraintName("fk_posts_blogs");
});
"#;
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_empty_model() {
        let generator = Provider::Relational.generator();
        let text = render_model(&ModelScaffolder::new(&generator).scaffold(&Model::default()));
        assert!(text.is_empty());
    }
}
