use ansiprint_io::{InputSelection, PrintConfig, StreamCopier};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::io;
use std::path::PathBuf;

fn create_text(len: usize) -> Vec<u8> {
    (0..len)
        .map(|i| if i % 72 == 71 { b'\n' } else { b'a' + (i % 26) as u8 })
        .collect()
}

fn bench_copy_files(c: &mut Criterion) {
    let text = create_text(1 << 20);
    let sources: Vec<&[u8]> = text.chunks(64 * 1024).collect();
    let names: Vec<PathBuf> = (0..sources.len())
        .map(|i| PathBuf::from(format!("part{i}")))
        .collect();

    let mut group = c.benchmark_group("copy_files");
    group.throughput(Throughput::Bytes(text.len() as u64));

    for buffer_size in [512usize, 8192, 65536] {
        for translate in [false, true] {
            let config = PrintConfig::new(buffer_size)
                .unwrap()
                .with_translate_line_endings(translate)
                .with_input(InputSelection::Files(names.clone()));

            group.bench_with_input(
                BenchmarkId::from_parameter(format!("{}buf_translate_{}", buffer_size, translate)),
                &config,
                |b, config| {
                    b.iter(|| {
                        let mut copier = StreamCopier::new(config).unwrap();
                        black_box(copier.copy_files(&sources, &mut io::sink()).unwrap());
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_copy_files);
criterion_main!(benches);
