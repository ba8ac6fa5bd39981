use {
    lucene_stored_docs::{
        document::{MultiDocumentStoredFieldVisitor, StoredValue},
        index::{FieldInfo, FieldInfos, IndexOptions, MemoryStoredFields, StoredFields},
        util::Number,
    },
    pretty_assertions::assert_eq,
    std::{collections::HashSet, io::ErrorKind as IoErrorKind},
    test_log::test,
};

fn rfc_store() -> MemoryStoredFields {
    let infos = [
        FieldInfo::stored_only("id", 0),
        FieldInfo::new("title", 1, true, true, false, IndexOptions::DocsAndFreqsAndPositionsAndOffsets).unwrap(),
        FieldInfo::new("author", 2, false, false, false, IndexOptions::Docs).unwrap(),
        FieldInfo::stored_only("pages", 3),
        FieldInfo::stored_only("score", 4),
        FieldInfo::stored_only("digest", 5),
    ];
    let mut sf = MemoryStoredFields::new(FieldInfos::try_from(infos.as_slice()).unwrap());

    sf.start_document().unwrap();
    sf.write_int("id", 791).unwrap();
    sf.write_string("title", "Internet Protocol").unwrap();
    sf.write_string("author", "J. Postel").unwrap();
    sf.write_long("pages", 45).unwrap();
    sf.finish_document().unwrap();

    sf.start_document().unwrap();
    sf.write_int("id", 793).unwrap();
    sf.write_string("title", "Transmission Control Protocol").unwrap();
    sf.write_float("score", 4.5).unwrap();
    sf.write_double("score", 4.75).unwrap();
    sf.write_binary("digest", &[0xca, 0xfe]).unwrap();
    sf.finish_document().unwrap();

    sf.start_document().unwrap();
    sf.write_int("id", 2119).unwrap();
    sf.write_string("author", "S. Bradner").unwrap();
    sf.write_string("author", "Harvard").unwrap();
    sf.finish_document().unwrap();

    sf
}

#[test]
fn load_all_fields() {
    let mut sf = rfc_store();
    let docs = sf.documents(&[0, 1, 2], None).unwrap();
    assert_eq!(docs.len(), 3);

    let names: Vec<&str> = docs[0].iter().map(|f| f.name()).collect();
    assert_eq!(names, vec!["id", "title", "author", "pages"]);
    assert_eq!(docs[0].get_fields()[0].value(), &StoredValue::Int(791));
    assert_eq!(docs[0].get("title"), Some("Internet Protocol"));

    let title_type = docs[1].get_field("title")[0].field_type();
    assert!(title_type.store_term_vectors());
    assert!(title_type.omit_norms());
    assert_eq!(title_type.index_options(), IndexOptions::DocsAndFreqsAndPositionsAndOffsets);

    let scores: Vec<&StoredValue> = docs[1].get_field("score").into_iter().map(|f| f.value()).collect();
    assert_eq!(scores, vec![&StoredValue::Float(4.5), &StoredValue::Double(4.75)]);
    assert_eq!(docs[1].get_binary_value("digest"), Some([0xcau8, 0xfe].as_slice()));

    assert_eq!(docs[2].get_values("author"), vec!["S. Bradner", "Harvard"]);
}

#[test]
fn load_selected_fields_in_request_order() {
    let mut sf = rfc_store();
    let fields: HashSet<String> = ["title".to_string(), "score".to_string()].into_iter().collect();
    let docs = sf.documents(&[2, 0, 1, 0], Some(fields)).unwrap();

    assert_eq!(docs.len(), 4);
    // Doc 2 has neither field; it is still returned, empty.
    assert!(docs[0].is_empty());
    assert_eq!(docs[1].to_string(), docs[3].to_string());
    assert_eq!(docs[1].len(), 1);
    assert_eq!(docs[1].get("title"), Some("Internet Protocol"));
    let names: Vec<&str> = docs[2].iter().map(|f| f.name()).collect();
    assert_eq!(names, vec!["title", "score", "score"]);
}

#[test]
fn load_nothing() {
    let mut sf = rfc_store();
    assert!(sf.documents(&[], None).unwrap().is_empty());

    let docs = sf.documents(&[0, 1], Some(HashSet::new())).unwrap();
    assert_eq!(docs.len(), 2);
    assert!(docs.iter().all(|d| d.is_empty()));
}

#[test]
fn invalid_doc_id_propagates() {
    let mut sf = rfc_store();
    let e = sf.documents(&[0, 3], None).unwrap_err();
    assert_eq!(e.kind(), IoErrorKind::InvalidInput);
}

#[test]
fn driver_must_seal_the_last_document() {
    let mut sf = rfc_store();
    let mut visitor = MultiDocumentStoredFieldVisitor::from_fields(["id"]);

    sf.visit_document(0, &mut visitor).unwrap();
    visitor.new_document();
    sf.visit_document(1, &mut visitor).unwrap();

    // The second document was visited but never sealed.
    assert_eq!(visitor.get_documents().len(), 1);
    assert_eq!(visitor.current_document().len(), 1);

    visitor.new_document();
    let docs = visitor.into_documents();
    assert_eq!(docs.len(), 2);
    assert_eq!(docs[1].get_fields()[0].value().numeric_value(), Some(Number::i32(793)));
}
