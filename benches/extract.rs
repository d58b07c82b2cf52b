// benches/extract.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use datadash::extract;

fn sample_page(rows: usize) -> String {
    let mut html = String::from("<html><body><h1>Listing</h1><table>");
    for i in 0..rows {
        html.push_str(&format!(
            "<tr><td>Item {i}</td><td></td><td>{} FCFA</td><td>  </td></tr>",
            i * 500
        ));
    }
    html.push_str("</table><table><tr><td>ignored</td></tr></table></body></html>");
    html
}

fn bench_first_table(c: &mut Criterion) {
    let small = sample_page(50);
    let large = sample_page(2000);

    c.bench_function("first_table_50_rows", |b| {
        b.iter(|| {
            let rows = extract::first_table(black_box(&small)).unwrap();
            black_box(rows.len())
        })
    });

    c.bench_function("first_table_2000_rows", |b| {
        b.iter(|| {
            let rows = extract::first_table(black_box(&large)).unwrap();
            black_box(rows.len())
        })
    });
}

criterion_group!(benches, bench_first_table);
criterion_main!(benches);
