use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use totvs_database_parser_dblog::{parse_block, parse_blocks_from_string, segment};

/// 生成一段合成日志：语句块 + 结果块交替，穿插噪声行
fn synthetic_log(pairs: usize) -> String {
    let mut log = String::from("Log Iniciado Por: operador\n");
    for i in 0..pairs {
        log.push_str(&format!(
            "10/03/2025 14:22:01 - {:06} Open: SELECT * FROM HOSPEDES WHERE ID > {}\n",
            i, i
        ));
        log.push_str("  AND STATUS = 'ATIVO'\n");
        log.push_str(&format!("10/03/2025 14:22:02 - {:06} retorno\n", i + 1));
        log.push_str("FieldIndex=0; Name=ID; Tipo=INT; Value='5'\n");
        log.push_str("FieldIndex=1; Name=NOME; Tipo=STRING; Value='Ana Souza'\n");
        log.push_str("Record Count = 1\n");
    }
    log
}

/// 测试完整管线（分类 + 切分 + 并行提取 + 合并）
fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_blocks_from_string");
    group.sample_size(20);

    for pairs in [100usize, 1_000, 10_000] {
        let log = synthetic_log(pairs);
        group.bench_with_input(BenchmarkId::from_parameter(pairs), &log, |b, log| {
            b.iter(|| parse_blocks_from_string(black_box(log)));
        });
    }

    group.finish();
}

/// 测试批量切分
fn bench_segment(c: &mut Criterion) {
    let log = synthetic_log(1_000);
    let lines: Vec<&str> = log.lines().collect();

    c.bench_function("segment_1000_pairs", |b| {
        b.iter(|| segment(black_box(&lines)));
    });
}

/// 测试单块提取状态机
fn bench_parse_block(c: &mut Criterion) {
    let lines = [
        "10/03/2025 14:22:02 - 000002 retorno",
        "FieldIndex=0; Name=ID; Tipo=INT; Value='5'",
        "FieldIndex=1; Name=NOME; Tipo=STRING; Value='Ana Souza'",
        "FieldIndex=0; Name=ID; Tipo=INT; Value='6'",
        "FieldIndex=1; Name=NOME; Tipo=STRING; Value='Bruno Lima'",
        "Record Count = 2",
    ];

    c.bench_function("parse_block_two_rows", |b| {
        b.iter(|| parse_block(black_box(&lines)));
    });
}

criterion_group!(
    benches,
    bench_full_pipeline,
    bench_segment,
    bench_parse_block
);
criterion_main!(benches);
