//! Integration tests for workbook processing.
//!
//! Workbooks are built with rust_xlsxwriter, processed with the rule-based
//! generator (or a mock enricher) and read back with calamine.

mod common;

use std::io::Cursor;
use std::sync::Arc;

use crate::common::*;
use calamine::{Data, Reader, Xlsx};
use seo_meta::{EnrichmentPayload, MetaGenerator, MockEnricher, ProcessSummary};
use seo_server::workbook::{write_sheet, CellValue, Sheet};
use seo_server::{process_workbook, ProcessError};

const KULAKLIK_DETAILS: &str = "<p>bu kablosuz kulaklık aktif gürültü engelleme, otuz saate varan \
    pil ömrü ve hızlı şarj desteğiyle gün boyu kesintisiz ve net bir dinleme deneyimi \
    sunar.</p><p>Kutu içeriği: kulaklık, kablo</p>";

#[tokio::test]
async fn test_root_product_gets_rule_based_metadata() {
    let processed = process_workbook(&galaxy_workbook(), &MetaGenerator::new())
        .await
        .unwrap();
    let sheet = read_workbook(&processed.bytes);

    assert_eq!(
        cell_text(&sheet, 0, "title").as_deref(),
        Some("Samsung Galaxy S21 telefon")
    );
    assert_eq!(
        cell_text(&sheet, 0, "description").as_deref(),
        Some("Samsung Galaxy S21 telefon. Günlük kullanıma uygun, net ve pratik bir seçimdir.")
    );
    assert_eq!(
        cell_text(&sheet, 0, "keywords").as_deref(),
        Some("Samsung Galaxy S21, telefon")
    );
    assert_eq!(processed.summary.rule_based, 1);
}

#[tokio::test]
async fn test_variant_and_filled_rows_untouched() {
    let bytes = build_workbook(
        &[
            "label",
            "brand",
            "mainCategory",
            "rootProductStockCode",
            "title",
            "description",
            "keywords",
        ],
        vec![
            vec![
                text("Galaxy S21 Mavi"),
                text("Samsung"),
                text("Telefon"),
                number(1001.0),
                CellValue::Empty,
                CellValue::Empty,
                CellValue::Empty,
            ],
            vec![
                text("Galaxy S22"),
                text("Samsung"),
                text("Telefon"),
                number(0.0),
                CellValue::Empty,
                CellValue::Empty,
                text("mevcut anahtar"),
            ],
            vec![
                text("Galaxy S23"),
                text("Samsung"),
                text("Telefon"),
                number(0.0),
                CellValue::Empty,
                CellValue::Empty,
                CellValue::Empty,
            ],
        ],
    );

    let processed = process_workbook(&bytes, &MetaGenerator::new()).await.unwrap();
    let sheet = read_workbook(&processed.bytes);

    assert_eq!(sheet.rows.len(), 3);

    // Variant
    assert_eq!(cell_text(&sheet, 0, "label").as_deref(), Some("Galaxy S21 Mavi"));
    assert_eq!(cell_text(&sheet, 0, "title"), None);
    assert_eq!(cell_text(&sheet, 0, "keywords"), None);

    // Already filled
    assert_eq!(cell_text(&sheet, 1, "title"), None);
    assert_eq!(cell_text(&sheet, 1, "description"), None);
    assert_eq!(cell_text(&sheet, 1, "keywords").as_deref(), Some("mevcut anahtar"));

    // Eligible
    assert!(cell_text(&sheet, 2, "title").unwrap().contains("Galaxy S23"));

    assert_eq!(
        processed.summary,
        ProcessSummary {
            total_rows: 3,
            enriched: 0,
            rule_based: 1,
            skipped_variants: 1,
            skipped_filled: 1,
        }
    );
}

#[tokio::test]
async fn test_text_stock_code_zero_is_root() {
    let bytes = build_workbook(
        &CATALOG_HEADERS,
        vec![vec![text("Galaxy S21"), text("Samsung"), text("Telefon"), text("0")]],
    );

    let processed = process_workbook(&bytes, &MetaGenerator::new()).await.unwrap();
    assert_eq!(processed.summary.generated(), 1);
}

#[tokio::test]
async fn test_missing_required_column_rejected() {
    let bytes = build_workbook(
        &["label", "mainCategory", "rootProductStockCode"],
        vec![vec![text("Galaxy S21"), text("Telefon"), number(0.0)]],
    );

    let err = process_workbook(&bytes, &MetaGenerator::new())
        .await
        .unwrap_err();

    match err {
        ProcessError::MissingColumns(missing) => assert_eq!(missing, vec!["brand"]),
        other => panic!("expected MissingColumns, got {:?}", other),
    }
}

#[tokio::test]
async fn test_garbage_bytes_unreadable() {
    let err = process_workbook(b"not a workbook", &MetaGenerator::new())
        .await
        .unwrap_err();

    assert!(matches!(err, ProcessError::Unreadable(_)));
}

#[tokio::test]
async fn test_column_order_preserved_and_outputs_appended() {
    let bytes = build_workbook(
        &["sku", "label", "brand", "mainCategory", "rootProductStockCode", "stok"],
        vec![vec![
            text("SKU-1"),
            text("Galaxy S21"),
            text("Samsung"),
            text("Telefon"),
            number(0.0),
            number(12.0),
        ]],
    );

    let processed = process_workbook(&bytes, &MetaGenerator::new()).await.unwrap();
    let sheet = read_workbook(&processed.bytes);

    assert_eq!(
        sheet.headers,
        vec![
            "sku",
            "label",
            "brand",
            "mainCategory",
            "rootProductStockCode",
            "stok",
            "title",
            "description",
            "keywords",
        ]
    );
    assert_eq!(cell_text(&sheet, 0, "sku").as_deref(), Some("SKU-1"));
    assert_eq!(sheet.cell(0, 5), &CellValue::Number(12.0));
}

#[tokio::test]
async fn test_details_column_feeds_description() {
    let bytes = build_workbook(
        &["label", "brand", "mainCategory", "rootProductStockCode", "urunDetayi"],
        vec![vec![
            text("WH-1000XM5"),
            text("Sony"),
            text("Kulaklık"),
            number(0.0),
            text(KULAKLIK_DETAILS),
        ]],
    );

    let processed = process_workbook(&bytes, &MetaGenerator::new()).await.unwrap();
    let sheet = read_workbook(&processed.bytes);
    let description = cell_text(&sheet, 0, "description").unwrap();

    assert!(description.starts_with("Bu kablosuz kulaklık"));
    assert!(!description.contains('<'));
    assert!(!description.contains("Kutu içeriği"));

    // Raw details are written back untouched
    assert_eq!(
        cell_text(&sheet, 0, "urunDetayi").as_deref(),
        Some(KULAKLIK_DETAILS)
    );
}

#[tokio::test]
async fn test_enrichment_output_written() {
    let title = "Samsung Galaxy S21 128 GB Akıllı Telefon Hayalet Gri Renk";
    let description = "Samsung Galaxy S21, 6.2 inç Dynamic AMOLED ekranı, 64 MP kamerası ve \
        güçlü Exynos işlemcisiyle günlük kullanımda akıcı ve hızlı bir deneyim sunar.";
    let enricher = Arc::new(MockEnricher::returning(EnrichmentPayload::new(
        title,
        description,
        ["Samsung Galaxy S21", "akıllı telefon", "128 GB telefon"],
    )));
    let generator = MetaGenerator::new().with_enricher(enricher.clone());

    let processed = process_workbook(&galaxy_workbook(), &generator).await.unwrap();
    let sheet = read_workbook(&processed.bytes);

    assert_eq!(cell_text(&sheet, 0, "title").as_deref(), Some(title));
    assert_eq!(cell_text(&sheet, 0, "description").as_deref(), Some(description));
    assert_eq!(
        cell_text(&sheet, 0, "keywords").as_deref(),
        Some("Samsung Galaxy S21, akıllı telefon, 128 GB telefon")
    );
    assert_eq!(processed.summary.enriched, 1);
    assert_eq!(enricher.call_count(), 1);
}

#[tokio::test]
async fn test_failing_enricher_falls_back_to_rules() {
    let generator =
        MetaGenerator::new().with_enricher(Arc::new(MockEnricher::failing("timeout")));

    let processed = process_workbook(&galaxy_workbook(), &generator).await.unwrap();
    let sheet = read_workbook(&processed.bytes);

    assert_eq!(
        cell_text(&sheet, 0, "title").as_deref(),
        Some("Samsung Galaxy S21 telefon")
    );
    assert_eq!(processed.summary.rule_based, 1);
    assert_eq!(processed.summary.enriched, 0);
}

/// Raw calamine view of the first worksheet, bypassing the sheet model.
fn raw_range(bytes: &[u8]) -> calamine::Range<Data> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes.to_vec())).unwrap();
    let name = workbook.sheet_names()[0].clone();
    workbook.worksheet_range(&name).unwrap()
}

#[tokio::test]
async fn test_date_cells_survive_in_skipped_and_filled_rows() {
    let bytes = build_workbook(
        &["label", "brand", "mainCategory", "rootProductStockCode", "launchDate"],
        vec![
            vec![
                text("Galaxy S21 Mavi"),
                text("Samsung"),
                text("Telefon"),
                number(7.0),
                CellValue::DateTime(44225.0),
            ],
            vec![
                text("Galaxy S21"),
                text("Samsung"),
                text("Telefon"),
                number(0.0),
                CellValue::DateTime(44226.0),
            ],
        ],
    );
    assert!(matches!(raw_range(&bytes).get((1, 4)), Some(Data::DateTime(_))));

    let processed = process_workbook(&bytes, &MetaGenerator::new()).await.unwrap();
    let range = raw_range(&processed.bytes);

    match range.get((1, 4)) {
        Some(Data::DateTime(dt)) => assert_eq!(dt.as_f64(), 44225.0),
        other => panic!("expected a date cell, got {:?}", other),
    }
    match range.get((2, 4)) {
        Some(Data::DateTime(dt)) => assert_eq!(dt.as_f64(), 44226.0),
        other => panic!("expected a date cell, got {:?}", other),
    }
    assert_eq!(processed.summary.skipped_variants, 1);
    assert_eq!(processed.summary.rule_based, 1);
}

#[tokio::test]
async fn test_sheet_offset_from_a1_is_preserved() {
    // Headers start at B3: column A and rows 1-2 are empty
    let mut sheet = Sheet::new(
        "Sheet1",
        ["", "label", "brand", "mainCategory", "rootProductStockCode"]
            .iter()
            .map(|h| h.to_string())
            .collect(),
    );
    sheet.header_row = 2;
    sheet.rows.push(vec![
        CellValue::Empty,
        text("Galaxy S21"),
        text("Samsung"),
        text("Telefon"),
        number(0.0),
    ]);
    let bytes = write_sheet(&sheet).unwrap();
    assert_eq!(raw_range(&bytes).start(), Some((2, 1)));

    let processed = process_workbook(&bytes, &MetaGenerator::new()).await.unwrap();
    let range = raw_range(&processed.bytes);

    assert_eq!(range.start(), Some((2, 1)));
    assert_eq!(range.get((0, 0)), Some(&Data::String("label".into())));
    assert_eq!(range.get((0, 4)), Some(&Data::String("title".into())));
    assert_eq!(range.get((1, 0)), Some(&Data::String("Galaxy S21".into())));

    let read = read_workbook(&processed.bytes);
    assert_eq!(read.header_row, 2);
    assert_eq!(read.column_index("label"), Some(1));
    assert_eq!(
        cell_text(&read, 0, "title").as_deref(),
        Some("Samsung Galaxy S21 telefon")
    );
}
