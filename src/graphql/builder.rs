//! Pure builders translating typed entities into GraphQL operation strings.
//!
//! Every function here is a single-shot translation over (entity or id
//! pair, schema registry): no I/O, no state between calls. The returned
//! operation is a complete query/mutation document with all values
//! inlined as literals, ready for [`GraphqlExecutor::exec`] or for
//! logging as-is.
//!
//! Field emission for entity merges follows the registry, not the
//! instance: fields are walked in schema declaration order, relationship
//! fields are skipped (edges are merged separately), unset fields are
//! skipped, and anything the schema does not declare (such as an
//! entity's `extras` side-channel) is silently dropped. Dropping
//! unknown fields is contract, not leniency: callers may attach scratch
//! data to an instance without breaking the mutation.
//!
//! [`GraphqlExecutor::exec`]: super::GraphqlExecutor::exec

use crate::error::AppError;
use crate::models::{FieldValue, GraphEntity, LocalDateTime};
use crate::schema::{FieldKind, Registry, RelationshipDef};

/// Build the `Merge<EntityType>` mutation for an entity instance.
///
/// The instance must already carry its content-derived id: it is the
/// match key the store upserts by, and is never omitted. Fails with
/// [`AppError::MissingIdentity`] otherwise.
pub fn build_merge_operation<E: GraphEntity + ?Sized>(
    registry: &Registry,
    entity: &E,
) -> Result<String, AppError> {
    let def = registry.entity(entity.entity_type())?;
    if entity.id().is_none() {
        return Err(AppError::MissingIdentity {
            entity_type: def.name.to_string(),
        });
    }

    let mut args = Vec::new();
    for field in &def.fields {
        if matches!(field.kind, FieldKind::Relationship) {
            continue;
        }
        if let Some(value) = entity.field(field.name) {
            args.push(format!("{}: {}", field.name, render_value(&value)));
        }
    }

    Ok(format!(
        "mutation {{\n  Merge{}({}) {{\n    id\n  }}\n}}",
        def.name,
        args.join(", ")
    ))
}

/// Build the edge-merge mutation for a resolved relationship.
///
/// Matches both endpoints by id and merges the directed edge between
/// them; re-merging the same triple is a no-op at the store, so the
/// operation is safe to re-submit.
pub fn build_relationship_operation(def: &RelationshipDef, from_id: &str, to_id: &str) -> String {
    format!(
        "mutation {{\n  {}(from: {{id: {}}}, to: {{id: {}}}) {{\n    from {{ id }}\n    to {{ id }}\n  }}\n}}",
        def.mutation_name(),
        render_string(from_id),
        render_string(to_id)
    )
}

/// Resolve a relationship from two typed entities and build its merge.
///
/// Fails with [`AppError::UnknownRelationship`] when the name is not in
/// the registry, [`AppError::TypeMismatch`] when the entities' types do
/// not match the declared endpoints, and [`AppError::MissingIdentity`]
/// when either entity has no id yet.
pub fn build_relationship_between<F, T>(
    registry: &Registry,
    name: &str,
    from: &F,
    to: &T,
) -> Result<String, AppError>
where
    F: GraphEntity + ?Sized,
    T: GraphEntity + ?Sized,
{
    let def = registry.resolve_relationship(name, from.entity_type(), to.entity_type())?;
    let from_id = from.id().ok_or_else(|| AppError::MissingIdentity {
        entity_type: from.entity_type().to_string(),
    })?;
    let to_id = to.id().ok_or_else(|| AppError::MissingIdentity {
        entity_type: to.entity_type().to_string(),
    })?;
    Ok(build_relationship_operation(def, from_id, to_id))
}

/// Build a list query projecting an explicit field set over a type's
/// collection.
///
/// The caller enumerates fields; there is no "all fields" shorthand, so
/// a query can never silently balloon when the schema grows.
pub fn build_list_operation(
    registry: &Registry,
    entity_type: &str,
    fields: &[&str],
) -> Result<String, AppError> {
    let def = registry.entity(entity_type)?;
    let mut selection = String::new();
    for field in fields {
        selection.push_str("    ");
        selection.push_str(field);
        selection.push('\n');
    }
    Ok(format!("query {{\n  {} {{\n{}  }}\n}}", def.name, selection))
}

fn render_value(value: &FieldValue) -> String {
    match value {
        FieldValue::String(s) => render_string(s),
        FieldValue::Int(i) => i.to_string(),
        FieldValue::Float(f) => f.to_string(),
        FieldValue::Bool(b) => b.to_string(),
        FieldValue::StringList(items) => {
            let rendered: Vec<String> = items.iter().map(|s| render_string(s)).collect();
            format!("[{}]", rendered.join(", "))
        }
        FieldValue::DateTime(dt) => render_datetime(dt),
    }
}

fn render_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

fn render_datetime(dt: &LocalDateTime) -> String {
    let parts: Vec<String> = dt
        .components()
        .iter()
        .filter_map(|(name, v)| v.map(|v| format!("{name}: {v}")))
        .collect();
    format!("{{{}}}", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::idgen::idgen;
    use crate::models::{Bill, Minutes, News, Url};
    use serde_json::json;

    fn sample_bill() -> Bill {
        let mut bill = Bill::new();
        bill.name = Some("公文書等の管理に関する法律の一部を改正する法律案".to_string());
        bill.bill_number = Some("第195回衆法第4号".to_string());
        bill.submitted_date = Some(crate::models::LocalDateTime::ymd(2020, 1, 1));
        bill.extras
            .insert("invalid_field".to_string(), json!("このfieldはmergeに使われない"));
        bill.id = Some(idgen(Registry::global(), &bill).unwrap());
        bill
    }

    #[test]
    fn test_merge_contains_set_fields() {
        let bill = sample_bill();
        let op = build_merge_operation(Registry::global(), &bill).unwrap();

        assert!(op.starts_with("mutation {\n  MergeBill("));
        assert!(op.contains(&format!("id: \"{}\"", bill.id.as_deref().unwrap())));
        assert!(op.contains("name: \"公文書等の管理に関する法律の一部を改正する法律案\""));
        assert!(op.contains("billNumber: \"第195回衆法第4号\""));
        assert!(op.contains("submittedDate: {year: 2020, month: 1, day: 1}"));
    }

    #[test]
    fn test_merge_drops_unknown_and_unset_fields() {
        let bill = sample_bill();
        let op = build_merge_operation(Registry::global(), &bill).unwrap();

        assert!(!op.contains("invalid_field"));
        assert!(!op.contains("extras"));
        // category/reason were never set
        assert!(!op.contains("category"));
        assert!(!op.contains("reason"));
    }

    #[test]
    fn test_merge_requires_id() {
        let mut bill = sample_bill();
        bill.id = None;
        let err = build_merge_operation(Registry::global(), &bill).unwrap_err();
        assert!(matches!(err, AppError::MissingIdentity { entity_type } if entity_type == "Bill"));
    }

    #[test]
    fn test_string_escaping() {
        let mut url = Url::new();
        url.url = Some("https://example.com/?q=\"a\"".to_string());
        url.title = Some("line one\nline two".to_string());
        url.id = Some(idgen(Registry::global(), &url).unwrap());

        let op = build_merge_operation(Registry::global(), &url).unwrap();
        assert!(op.contains(r#"url: "https://example.com/?q=\"a\"""#));
        assert!(op.contains(r#"title: "line one\nline two""#));
    }

    #[test]
    fn test_list_values_preserve_order() {
        let mut minutes = Minutes::new();
        minutes.name = Some("第201回国会衆議院環境委員会第4号".to_string());
        minutes.topics = Some(vec!["天気について".to_string(), "カレーライスの件".to_string()]);
        minutes.id = Some(idgen(Registry::global(), &minutes).unwrap());

        let op = build_merge_operation(Registry::global(), &minutes).unwrap();
        assert!(op.contains("topics: [\"天気について\", \"カレーライスの件\"]"));
    }

    #[test]
    fn test_datetime_omits_unset_components() {
        let mut news = News::new();
        news.url = Some("https://www.nikkei.com/article/example/".to_string());
        news.published_at = Some(crate::models::LocalDateTime::ymd_hm(2020, 9, 22, 10, 30));
        news.id = Some(idgen(Registry::global(), &news).unwrap());

        let op = build_merge_operation(Registry::global(), &news).unwrap();
        assert!(op.contains("publishedAt: {year: 2020, month: 9, day: 22, hour: 10, minute: 30}"));

        news.published_at = Some(crate::models::LocalDateTime::ymd(2020, 9, 22));
        let op = build_merge_operation(Registry::global(), &news).unwrap();
        assert!(op.contains("publishedAt: {year: 2020, month: 9, day: 22}"));
        assert!(!op.contains("hour"));
    }

    #[test]
    fn test_relationship_operation_names_distinct_per_source() {
        let registry = Registry::global();
        let from_url = build_relationship_operation(
            registry.relationship("Url", "referredBills").unwrap(),
            "Url:aa",
            "Bill:bb",
        );
        let from_news = build_relationship_operation(
            registry.relationship("News", "referredBills").unwrap(),
            "News:cc",
            "Bill:bb",
        );

        assert!(from_url.contains("MergeUrlReferredBills(from: {id: \"Url:aa\"}, to: {id: \"Bill:bb\"})"));
        assert!(from_news.contains("MergeNewsReferredBills("));
        assert!(from_url.contains("from { id }"));
        assert!(from_url.contains("to { id }"));
    }

    #[test]
    fn test_relationship_between_checks_types_and_ids() {
        let registry = Registry::global();
        let bill = sample_bill();

        let mut url = Url::new();
        url.url = Some("http://www.shugiin.go.jp/internet/itdb_gian.nsf/html/gian/honbun/g19505004.htm".to_string());
        url.id = Some(idgen(registry, &url).unwrap());

        let op = build_relationship_between(registry, "referredBills", &url, &bill).unwrap();
        assert!(op.contains("MergeUrlReferredBills("));

        // Bill is not a valid source for referredBills
        let err = build_relationship_between(registry, "referredBills", &bill, &url).unwrap_err();
        assert!(matches!(err, AppError::TypeMismatch { .. }));

        // Unassigned id on the from side
        url.id = None;
        let err = build_relationship_between(registry, "referredBills", &url, &bill).unwrap_err();
        assert!(matches!(err, AppError::MissingIdentity { entity_type } if entity_type == "Url"));
    }

    #[test]
    fn test_list_operation_projects_requested_fields() {
        let op = build_list_operation(Registry::global(), "Bill", &["name", "billNumber"]).unwrap();
        assert_eq!(op, "query {\n  Bill {\n    name\n    billNumber\n  }\n}");
    }

    #[test]
    fn test_list_operation_unknown_type() {
        let err = build_list_operation(Registry::global(), "Senator", &["name"]).unwrap_err();
        assert!(matches!(err, AppError::UnknownEntityType(_)));
    }
}
