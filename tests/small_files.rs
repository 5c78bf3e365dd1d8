use mondo::annotations::flybase;
use mondo::parser::load;
use mondo::stats::{category_enrichment, contingency_table, top, Correction, GeneProfiles};
use mondo::{CategoryResolver, Closure, GeneId, MondoError, TermId};

const ONTOLOGY: &str = "tests/small_mondo.json";
const ANNOTATIONS: &str = "tests/small_annotations.tsv";

#[test]
fn load_ontology() {
    let (ontology, xrefs) = load(ONTOLOGY, "DOID:").unwrap();
    assert_eq!(ontology.len(), 10);
    assert_eq!(ontology.roots().len(), 1);
    assert!(ontology.roots().contains(&TermId::from(1u32)));

    // foreign and invalid nodes are not part of the ontology
    assert!(ontology.terms().all(|term| term.id().as_u32() <= 10));

    // the edges to other predicates and unknown terms are dropped
    let parkinson = ontology.term(5u32).unwrap();
    assert_eq!(parkinson.parent_ids().len(), 1);
    assert!(ontology.term(10u32).unwrap().label().is_none());

    assert_eq!(
        xrefs.get("DOID:14330"),
        &[TermId::from(5u32), TermId::from(6u32)]
    );
    assert!(xrefs.get("DOID:1").is_empty());
    assert!(!xrefs.contains("UMLS:C0524851"));
    assert_eq!(xrefs.len(), 4);
}

#[test]
fn other_xref_prefix() {
    let (_, xrefs) = load(ONTOLOGY, "MESH:").unwrap();
    assert_eq!(xrefs.len(), 1);
    assert_eq!(xrefs.get("MESH:D010300"), &[TermId::from(5u32)]);
}

#[test]
fn missing_file() {
    assert_eq!(
        load("tests/missing.json", "DOID:").unwrap_err(),
        MondoError::CannotOpenFile("tests/missing.json".to_string())
    );
}

#[test]
fn gene_profiles() {
    let (ontology, xrefs) = load(ONTOLOGY, "DOID:").unwrap();
    let resolver = CategoryResolver::new(&ontology, &xrefs);
    let records = flybase::read_file(ANNOTATIONS).unwrap();
    let profiles = GeneProfiles::build(&records, &resolver);

    assert_eq!(profiles.len(), 4);
    assert_eq!(profiles.unresolved_rows(), 2);

    let gene_a = profiles.get(&GeneId::from("FBgn0000001")).unwrap();
    assert_eq!(
        gene_a.categories().iter().collect::<Vec<_>>(),
        vec!["disease", "nervous system disorder"]
    );
    assert_eq!(
        gene_a.qualifiers().iter().collect::<Vec<_>>(),
        vec!["is not model of", "model of"]
    );

    let gene_c = profiles.get(&GeneId::from("FBgn0000003")).unwrap();
    assert_eq!(gene_c.categories().iter().collect::<Vec<_>>(), vec!["disease"]);

    // unresolved, but still part of the population
    let gene_d = profiles.get(&GeneId::from("FBgn0000004")).unwrap();
    assert!(gene_d.categories().is_empty());
    assert!(gene_d.has_qualifier("model of"));
}

#[test]
fn enrichment() {
    let (ontology, xrefs) = load(ONTOLOGY, "DOID:").unwrap();
    let resolver = CategoryResolver::new(&ontology, &xrefs);
    let records = flybase::read_file(ANNOTATIONS).unwrap();
    let profiles = GeneProfiles::build(&records, &resolver);

    assert_eq!(
        contingency_table(&profiles, "disease", "model of").rows(),
        [[2, 1], [1, 0]]
    );
    assert_eq!(
        contingency_table(&profiles, "nervous system disorder", "model of").rows(),
        [[2, 0], [1, 1]]
    );

    let mut results = category_enrichment(&profiles).unwrap();
    assert_eq!(results.len(), 6);
    for result in &results {
        assert_eq!(result.table().total(), 4);
    }

    Correction::BenjaminiHochberg.apply(&mut results, 0.05);
    for result in &results {
        let corrected = result.corrected_pvalue().unwrap();
        assert!(corrected >= result.pvalue() - 1e-12);
        assert!(corrected <= 1.0);
    }

    let best = top(&results, 3);
    assert_eq!(best.len(), 3);
    assert!(best.windows(2).all(|w| w[0].pvalue() <= w[1].pvalue()));
}

#[test]
fn cumulative_categories() {
    let (ontology, xrefs) = load(ONTOLOGY, "DOID:").unwrap();
    let resolver = CategoryResolver::new(&ontology, &xrefs).closure(Closure::Cumulative);
    let records = flybase::read_file(ANNOTATIONS).unwrap();
    let profiles = GeneProfiles::build(&records, &resolver);

    // DOID:1289 resolves now, only DOID:99999 is unknown
    assert_eq!(profiles.unresolved_rows(), 1);
    let gene_b = profiles.get(&GeneId::from("FBgn0000002")).unwrap();
    assert!(gene_b.in_category("neurodegenerative disease"));
    assert!(gene_b.in_category("hereditary disease"));
}
