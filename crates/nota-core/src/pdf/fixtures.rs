//! PDF documents built with lopdf for tests.

use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, Stream, dictionary};

/// Lines of a nota laid out as the default template expects.
pub(crate) const NOTA_LINES: [&str; 16] = [
    "Header",
    "Foo",
    "Invoice date 01/02/2023",
    "Line 3",
    "Line 4",
    "Line 5",
    "Line 6",
    "Line 7",
    "Line 8",
    "Line 9",
    "Line 10",
    "Line 11",
    "CL123",
    "Nº Nota:",
    "9876",
    "Footer",
];

fn build(lines: &[&str]) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut operations = vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F1".into(), 12.into()]),
        Operation::new("TL", vec![14.into()]),
        Operation::new("Td", vec![50.into(), 780.into()]),
    ];
    for line in lines {
        // WinAnsi covers Latin-1, so each char is one byte
        let bytes: Vec<u8> = line.chars().map(|c| c as u8).collect();
        operations.push(Operation::new("Tj", vec![Object::string_literal(bytes)]));
        operations.push(Operation::new("T*", vec![]));
    }
    operations.push(Operation::new("ET", vec![]));

    let content = Content { operations };
    let content_id = doc.add_object(Stream::new(
        dictionary! {},
        content.encode().unwrap(),
    ));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc
}

fn save(mut doc: Document) -> Vec<u8> {
    let mut data = Vec::new();
    doc.save_to(&mut data).unwrap();
    data
}

/// Single-page PDF drawing each line in Helvetica, one under the other.
pub(crate) fn sample_pdf(lines: &[&str]) -> Vec<u8> {
    save(build(lines))
}

/// Like [`sample_pdf`] with a standard security handler granting only the
/// `permissions` flags. The handler carries no usable keys.
pub(crate) fn encrypted_pdf(lines: &[&str], permissions: i64) -> Vec<u8> {
    let mut doc = build(lines);
    let mut encrypt = Dictionary::new();
    encrypt.set("Filter", "Standard");
    encrypt.set("V", 1);
    encrypt.set("R", 2);
    encrypt.set("Length", 40);
    encrypt.set("P", permissions);
    let encrypt_id = doc.add_object(encrypt);
    doc.trailer.set("Encrypt", encrypt_id);
    save(doc)
}
