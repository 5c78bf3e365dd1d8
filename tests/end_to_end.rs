use mondo::annotations::flybase;
use mondo::parser::{Graph, GraphDocument};
use mondo::stats::{category_enrichment, contingency_table, GeneProfiles};
use mondo::{CategoryResolver, Closure, MondoError, Ontology, Resolution, XrefIndex};

const CHAIN: &str = r#"{"graphs": [{
    "nodes": [
        {"id": "http://purl.obolibrary.org/obo/MONDO_0000001", "lbl": "Root Disease"},
        {"id": "http://purl.obolibrary.org/obo/MONDO_0000002", "lbl": "Mid Disease"},
        {"id": "http://purl.obolibrary.org/obo/MONDO_0000003", "lbl": "Leaf Disease",
         "meta": {"xrefs": [{"val": "DOID:9"}]}}
    ],
    "edges": [
        {"sub": "http://purl.obolibrary.org/obo/MONDO_0000002", "pred": "is_a", "obj": "http://purl.obolibrary.org/obo/MONDO_0000001"},
        {"sub": "http://purl.obolibrary.org/obo/MONDO_0000003", "pred": "is_a", "obj": "http://purl.obolibrary.org/obo/MONDO_0000002"}
    ]
}]}"#;

fn chain() -> (Ontology, XrefIndex) {
    let document = GraphDocument::from_json(CHAIN).unwrap();
    let graph = document.graph().unwrap();
    (
        Ontology::from_graph(graph).unwrap(),
        XrefIndex::from_graph(graph, "DOID:"),
    )
}

fn categories<'a>(resolver: CategoryResolver<'a>, depth: usize, closure: Closure) -> Vec<&'a str> {
    resolver
        .max_depth(depth)
        .closure(closure)
        .categories_for("DOID:9")
        .into_iter()
        .collect()
}

#[test]
fn leaf_to_root_by_depth() {
    let (ontology, xrefs) = chain();
    let resolver = CategoryResolver::new(&ontology, &xrefs);

    let labels = |depth, closure| categories(resolver, depth, closure);

    assert_eq!(labels(1, Closure::Frontier), vec!["Mid Disease"]);
    assert_eq!(labels(2, Closure::Frontier), vec!["Root Disease"]);
    // ROOT does not have parents, the third generation is empty
    assert!(labels(3, Closure::Frontier).is_empty());
    assert_eq!(
        resolver.max_depth(3).resolve("DOID:9"),
        Resolution::NoCategories
    );

    assert_eq!(labels(1, Closure::Cumulative), vec!["Mid Disease"]);
    assert_eq!(
        labels(3, Closure::Cumulative),
        vec!["Mid Disease", "Root Disease"]
    );
}

#[test]
fn annotations_with_chain() {
    let (ontology, xrefs) = chain();
    let data = "## header\n\
        FBgn1\tg1\t\tmodel of\tDOID:9\tleaf\n\
        FBgn2\tg2\t\tameliorates\tDOID:404\tunknown\n";
    let records = flybase::read(data.as_bytes()).unwrap();

    let resolver = CategoryResolver::new(&ontology, &xrefs)
        .max_depth(3)
        .closure(Closure::Cumulative);
    let profiles = GeneProfiles::build(&records, &resolver);
    assert_eq!(profiles.len(), 2);
    assert_eq!(profiles.unresolved_rows(), 1);

    let table = contingency_table(&profiles, "Mid Disease", "model of");
    assert_eq!(table.rows(), [[1, 0], [0, 1]]);

    let results = category_enrichment(&profiles).unwrap();
    // 2 categories x 2 qualifiers
    assert_eq!(results.len(), 4);
    let best = results
        .iter()
        .find(|r| r.category() == "Mid Disease" && r.qualifier() == "model of")
        .unwrap();
    assert!((best.pvalue() - 1.0).abs() < 1e-12);
    assert!(best.odds_ratio().is_infinite());
    assert!((best.expected() - 0.5).abs() < 1e-12);
    assert!((best.fold_change() - 2.0).abs() < 1e-12);
}

#[test]
fn mirrored_links_and_roots() {
    let graph = Graph::from_parts(
        &[(1, Some("a")), (2, Some("b")), (3, Some("c")), (4, None)],
        &[(2, 1), (3, 1), (3, 2)],
    );
    let ontology = Ontology::from_graph(&graph).unwrap();

    for term in ontology.terms() {
        for parent in term.parents() {
            assert!(parent.children_ids().contains(&term.id()));
        }
        for child in term.children() {
            assert!(child.parent_ids().contains(&term.id()));
        }
        assert_eq!(term.is_root(), ontology.roots().contains(&term.id()));
    }
    assert_eq!(ontology.roots().len(), 2);
}

#[test]
fn cyclic_graph() {
    let graph = Graph::from_parts(
        &[(1, Some("A")), (2, Some("B")), (3, Some("C"))],
        &[(1, 2), (2, 3), (3, 1)],
    );
    let ontology = Ontology::from_graph(&graph).unwrap();
    assert!(ontology.roots().is_empty());
    for depth in 0..10 {
        assert!(ontology.ancestor_labels(1u32, depth).len() <= 1);
    }
    assert!(ontology.ancestor_labels(1u32, 3).is_empty());
}

#[test]
fn union_of_two_mappings() {
    // 1 <- 2 and 3 <- 4, EXT:1 maps to 2 and 4
    let graph = Graph::from_parts(
        &[(1, Some("left")), (2, Some("l")), (3, Some("right")), (4, Some("r"))],
        &[(2, 1), (4, 3)],
    );
    let ontology = Ontology::from_graph(&graph).unwrap();
    let mut xrefs = XrefIndex::default();
    assert!(xrefs.insert("EXT:1", 2u32.into()));
    assert!(xrefs.insert("EXT:1", 4u32.into()));

    let resolver = CategoryResolver::new(&ontology, &xrefs).max_depth(1);
    assert_eq!(
        resolver.categories_for("EXT:1").into_iter().collect::<Vec<_>>(),
        vec!["left", "right"]
    );
}

#[test]
fn unknown_start() {
    let (ontology, xrefs) = chain();
    assert!(ontology.ancestor_labels(99u32, 1).is_empty());
    let resolver = CategoryResolver::new(&ontology, &xrefs);
    assert_eq!(resolver.resolve("DOID:1"), Resolution::Unknown);
}

#[test]
fn empty_graph_fails() {
    let document = GraphDocument::from_json(r#"{"graphs": [{"nodes": []}]}"#).unwrap();
    assert_eq!(
        Ontology::from_graph(document.graph().unwrap()).unwrap_err(),
        MondoError::EmptyGraph
    );
}
