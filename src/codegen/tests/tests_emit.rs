#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::Fixture;
use crate::codegen::{GenerateOptions, WarningKind};
use crate::model::{Element, ElementKind};

#[test]
fn test_scalar_with_documentation() {
    let mut fx = Fixture::new();
    fx.model.add_element(
        Element::new("dt", ElementKind::PrimitiveType)
            .with_name("DateTime")
            .with_documentation("ISO-8601 timestamp"),
    );

    assert_eq!(
        fx.render("dt"),
        "\"\"\"\nISO-8601 timestamp\n\"\"\"\nscalar DateTime\n\n"
    );
}

#[test]
fn test_enum_literals_with_hash_comments() {
    let mut fx = Fixture::new();
    fx.model
        .add_element(Element::new("color", ElementKind::Enumeration).with_name("Color"));
    fx.model.add_element(
        Element::new("red", ElementKind::EnumerationLiteral)
            .with_name("RED")
            .with_documentation("Primary red")
            .with_owner("color"),
    );
    fx.model.add_element(
        Element::new("green", ElementKind::EnumerationLiteral)
            .with_name("GREEN")
            .with_owner("color"),
    );

    assert_eq!(
        fx.render("color"),
        "enum Color {\n    #Primary red\n    RED\n    GREEN\n}\n\n"
    );

    // Literal comments are not documentation blocks and survive idl_doc=false.
    let text = fx
        .render_with("color", &GenerateOptions::default().with_idl_doc(false))
        .text;
    assert!(text.contains("    #Primary red\n"));
}

#[test]
fn test_plain_type_with_attributes() {
    let mut fx = Fixture::new();
    fx.class("person", "Person");
    fx.attr("person", "p-name", "name", "String", Some("1"));
    fx.attr("person", "p-age", "age", "Int", None);

    assert_eq!(
        fx.render("person"),
        "type Person {\n\n    name: String!\n    age: Int\n}\n\n"
    );
}

#[test]
fn test_field_with_default_and_directive() {
    let mut fx = Fixture::new();
    fx.class("acct", "Account");
    fx.model.add_element(
        Element::new("status", ElementKind::Attribute)
            .with_name("status")
            .with_type_name("String")
            .with_default_value("\"ACTIVE\"")
            .with_owner("acct"),
    );
    fx.tag("status", "status-dep", "deprecated", "true");

    assert_eq!(
        fx.render("acct"),
        "type Account {\n\n    status: String=\"ACTIVE\" @deprecated(true)\n}\n\n"
    );
}

#[test]
fn test_field_documentation_precedes_field() {
    let mut fx = Fixture::new();
    fx.class("person", "Person");
    fx.model.add_element(
        Element::new("p-email", ElementKind::Attribute)
            .with_name("email")
            .with_type_name("String")
            .with_documentation("Contact address")
            .with_owner("person"),
    );

    assert_eq!(
        fx.render("person"),
        "type Person {\n\n    \"\"\"\n    Contact address\n    \"\"\"\n    email: String\n}\n\n"
    );
}

#[test]
fn test_operation_with_doc_params_and_directives() {
    let mut fx = Fixture::new();
    fx.class("query", "Query");
    let op = fx.model.add_element(
        Element::new("q-customer", ElementKind::Operation)
            .with_name("customer")
            .with_documentation("Find a customer")
            .with_owner("query"),
    );
    fx.model.add_element(
        Element::new("q-id", ElementKind::Parameter)
            .with_name("id")
            .with_type_name("ID")
            .with_multiplicity("1")
            .with_documentation("primary key")
            .with_owner(&op),
    );
    fx.returns("q-customer", "q-ret", "Customer");
    fx.tag("q-customer", "q-auth", "auth", "role: ADMIN");
    fx.constraint("q-customer", "q-dep", "deprecated", "reason: \"old\"");

    let expected = concat!(
        "type Query {\n",
        "\n",
        "    \"\"\"\n",
        "    Find a customer\n",
        "    param: id primary key\n",
        "    \"\"\"\n",
        "    customer(id: ID!): Customer @auth(role: ADMIN) @deprecated(reason: \"old\")\n",
        "\n",
        "}\n",
        "\n",
    );
    assert_eq!(fx.render("query"), expected);
}

#[test]
fn test_operation_param_defaults_and_no_return() {
    let mut fx = Fixture::new();
    fx.class("mutation", "Mutation");
    fx.operation("mutation", "m-reset", "reset");
    fx.model.add_element(
        Element::new("m-force", ElementKind::Parameter)
            .with_name("force")
            .with_type_name("Boolean")
            .with_default_value("false")
            .with_owner("m-reset"),
    );

    assert_eq!(
        fx.render("mutation"),
        "type Mutation {\n\n    reset(force: Boolean=false)\n\n}\n\n"
    );
}

#[test]
fn test_operation_list_parameters() {
    let mut fx = Fixture::new();
    fx.class("query", "Query");
    fx.operation("query", "q-orders", "orders");
    fx.param("q-orders", "q-ids", "ids", "ID", Some("1..*"));
    fx.param("q-orders", "q-limit", "limit", "Int", None);
    fx.returns("q-orders", "q-ret", "Order");

    assert_eq!(
        fx.render("query"),
        "type Query {\n\n    orders(ids: [ID!], limit: Int): Order\n\n}\n\n"
    );
}

#[test]
fn test_unnamed_operation_is_skipped() {
    let mut fx = Fixture::new();
    fx.class("query", "Query");
    fx.operation("query", "q-anon", "");

    assert_eq!(fx.render("query"), "type Query {\n\n}\n\n");
}

#[test]
fn test_input_and_schema_headers() {
    let mut fx = Fixture::new();
    fx.stereotyped("pi", "PersonInput", "input");
    fx.attr("pi", "pi-name", "name", "String", Some("1"));
    fx.stereotyped("schema", "Schema", "schema");
    fx.attr("schema", "s-query", "query", "Query", Some("1"));

    assert_eq!(
        fx.render("pi"),
        "input PersonInput {\n\n    name: String!\n}\n\n"
    );
    assert_eq!(fx.render("schema"), "schema {\n\n    query: Query!\n}\n\n");
}

#[test]
fn test_input_ignores_generalization_in_header() {
    let mut fx = Fixture::new();
    fx.class("base", "Base");
    fx.attr("base", "b-id", "id", "ID", Some("1"));
    fx.stereotyped("in", "BaseInput", "input");
    fx.generalize("g1", "in", "base");

    assert_eq!(fx.render("in"), "input BaseInput {\n\n    id: ID!\n}\n\n");
}

#[test]
fn test_implements_header_merges_interface_fields_first() {
    let mut fx = Fixture::new();
    fx.interface("named", "Named");
    fx.attr("named", "n-name", "name", "String", Some("1"));
    fx.class("dog", "Dog");
    fx.attr("dog", "d-breed", "breed", "String", None);
    fx.realize("r1", "dog", "named");

    assert_eq!(
        fx.render("dog"),
        "type Dog implements Named {\n\n    name: String!\n    breed: String\n}\n\n"
    );
}

#[test]
fn test_extends_and_implements_header() {
    let mut fx = Fixture::new();
    fx.interface("named", "Named");
    fx.attr("named", "n-name", "name", "String", Some("1"));
    fx.class("animal", "Animal");
    fx.attr("animal", "a-legs", "legs", "Int", None);
    fx.class("dog", "Dog");
    fx.generalize("g1", "dog", "animal");
    fx.realize("r1", "dog", "named");

    assert_eq!(
        fx.render("dog"),
        "type Dog extends Animal, Named {\n\n    name: String!\n    legs: Int\n}\n\n"
    );
}

#[test]
fn test_extends_skips_abstract_ancestors() {
    let mut fx = Fixture::new();
    fx.class("a", "A");
    fx.attr("a", "a-a", "a", "String", None);
    fx.abstract_class("b", "B");
    fx.attr("b", "b-b", "b", "String", None);
    fx.class("c", "C");
    fx.attr("c", "c-c", "c", "String", None);
    fx.generalize("g1", "c", "b");
    fx.generalize("g2", "b", "a");

    assert_eq!(
        fx.render("c"),
        "type C extends A {\n\n    a: String\n    b: String\n    c: String\n}\n\n"
    );
}

#[test]
fn test_multiple_inheritance_warns_and_uses_first_parent() {
    let mut fx = Fixture::new();
    fx.class("a", "A");
    fx.attr("a", "a-a", "a", "String", None);
    fx.class("b", "B");
    fx.attr("b", "b-b", "b", "String", None);
    fx.class("c", "C");
    fx.generalize("g1", "c", "a");
    fx.generalize("g2", "c", "b");

    let out = fx.render_with("c", &GenerateOptions::default());
    assert_eq!(
        out.text,
        concat!(
            "\"\"\"\n",
            "WARNING: you can only extend one class, ignoring others\n",
            "\"\"\"\n",
            "type C extends A {\n",
            "\n",
            "    a: String\n",
            "}\n",
            "\n",
        )
    );
    assert_eq!(out.warnings.len(), 1);
    assert_eq!(out.warnings[0].kind, WarningKind::MultipleInheritance);
}

#[test]
fn test_union_with_attributes_warns() {
    let mut fx = Fixture::new();
    fx.class("dog", "Dog");
    fx.class("cat", "Cat");
    fx.stereotyped("animal", "Animal", "union");
    fx.attr("animal", "an-legs", "legs", "Int", None);
    fx.depend("d1", "animal", "dog");
    fx.depend("d2", "animal", "cat");

    let out = fx.render_with("animal", &GenerateOptions::default());
    assert_eq!(
        out.text,
        concat!(
            "\"\"\"\n",
            "WARNING: Attributes on union types is not GraphQL compliant, ignoring.\n",
            "\"\"\"\n",
            "union Animal = Dog | Cat\n",
            "\n",
        )
    );
    let kinds: Vec<_> = out.warnings.iter().map(|w| w.kind).collect();
    assert_eq!(kinds, vec![WarningKind::UnionAttributes]);
}

#[test]
fn test_union_warnings_in_fixed_order() {
    let mut fx = Fixture::new();
    fx.class("base", "Base");
    fx.interface("iface", "Iface");
    fx.class("dog", "Dog");
    fx.stereotyped("pet", "Pet", "union");
    fx.generalize("g1", "pet", "base");
    fx.realize("r1", "pet", "iface");
    fx.operation("pet", "pet-op", "speak");
    fx.attr("pet", "pet-name", "name", "String", None);
    fx.depend("d1", "pet", "dog");

    let out = fx.render_with("pet", &GenerateOptions::default());
    let kinds: Vec<_> = out.warnings.iter().map(|w| w.kind).collect();
    assert_eq!(
        kinds,
        vec![
            WarningKind::UnionInheritance,
            WarningKind::UnionImplements,
            WarningKind::UnionOperations,
            WarningKind::UnionAttributes,
        ]
    );
    assert!(out.text.ends_with("union Pet = Dog\n\n"));
    assert!(!out.text.contains("speak"));
}

#[test]
fn test_union_without_dependencies_emits_no_line() {
    let mut fx = Fixture::new();
    fx.stereotyped("empty", "Empty", "union");

    assert_eq!(fx.render("empty"), "\n");
}

#[test]
fn test_idl_doc_disabled_keeps_warnings() {
    let mut fx = Fixture::new();
    fx.class("dog", "Dog");
    fx.stereotyped("animal", "Animal", "union");
    fx.model.add_element(
        Element::new("an-legs", ElementKind::Attribute)
            .with_name("legs")
            .with_documentation("leg count")
            .with_owner("animal"),
    );
    fx.depend("d1", "animal", "dog");

    let out = fx.render_with("animal", &GenerateOptions::default().with_idl_doc(false));
    assert_eq!(out.text, "union Animal = Dog\n\n");
    assert!(!out.text.contains("\"\"\""));
    assert_eq!(out.warnings.len(), 1);
}

#[test]
fn test_interface_extends_all_parents() {
    let mut fx = Fixture::new();
    fx.interface("node", "Node");
    fx.attr("node", "n-id", "id", "ID", Some("1"));
    fx.interface("ts", "Timestamped");
    fx.attr("ts", "t-at", "createdAt", "DateTime", None);
    fx.interface("entity", "Entity");
    fx.attr("entity", "e-name", "name", "String", None);
    fx.generalize("g1", "entity", "node");
    fx.generalize("g2", "entity", "ts");

    assert_eq!(
        fx.render("entity"),
        concat!(
            "interface Entity extends Node, Timestamped {\n",
            "\n",
            "    id: ID!\n",
            "    createdAt: DateTime\n",
            "    name: String\n",
            "}\n",
            "\n",
        )
    );
}

#[test]
fn test_abstract_class_and_non_classifiers_render_nothing() {
    let mut fx = Fixture::new();
    fx.abstract_class("shape", "Shape");
    fx.attr("shape", "s-area", "area", "Float", None);

    assert_eq!(fx.render("shape"), "");
    assert_eq!(fx.render("s-area"), "");
}

#[test]
fn test_tab_indentation() {
    let mut fx = Fixture::new();
    fx.class("person", "Person");
    fx.attr("person", "p-name", "name", "String", Some("1"));

    let text = fx
        .render_with("person", &GenerateOptions::default().with_tabs())
        .text;
    assert_eq!(text, "type Person {\n\n\tname: String!\n}\n\n");
}

#[test]
fn test_custom_indent_width() {
    let mut fx = Fixture::new();
    fx.class("person", "Person");
    fx.attr("person", "p-name", "name", "String", None);

    let text = fx
        .render_with("person", &GenerateOptions::default().with_indent_spaces(2))
        .text;
    assert_eq!(text, "type Person {\n\n  name: String\n}\n\n");
}
