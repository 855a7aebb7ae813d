use totvs_database_parser_dblog::{BlockReader, segment};

#[test]
fn test_reader_single_block() {
    let data = "10/03/2025 14:22:01 - 001234 Open: SELECT 1";
    let blocks: Vec<_> = BlockReader::new(data.as_bytes()).collect();

    assert_eq!(blocks.len(), 1);
    assert!(blocks[0].is_ok());
}

#[test]
fn test_reader_multiple_blocks() {
    let data = "10/03/2025 14:22:01 - 001234 primeira\n\
                10/03/2025 14:22:02 - 001235 segunda";
    let blocks: Vec<_> = BlockReader::new(data.as_bytes()).collect();

    assert_eq!(blocks.len(), 2);
    assert!(blocks.iter().all(|b| b.is_ok()));
}

#[test]
fn test_reader_block_with_content_lines() {
    let data = "10/03/2025 14:22:01 - 001234 Open: SELECT *\n\
                FROM HOSPEDES\n\
                WHERE ID > 0";
    let blocks: Vec<_> = BlockReader::new(data.as_bytes()).collect();

    assert_eq!(blocks.len(), 1);
    let block = blocks[0].as_ref().unwrap();
    assert_eq!(block.len(), 3);
    assert!(block.full_content().contains("FROM HOSPEDES"));
}

#[test]
fn test_reader_preamble_before_first_header() {
    let data = "linha solta\n\
                outra linha\n\
                10/03/2025 14:22:01 - 001234 consulta";
    let blocks: Vec<_> = BlockReader::new(data.as_bytes()).collect();

    assert_eq!(blocks.len(), 2);
    let preamble = blocks[0].as_ref().unwrap();
    assert!(!preamble.has_header());
    assert_eq!(preamble.len(), 2);
    assert!(blocks[1].as_ref().unwrap().has_header());
}

#[test]
fn test_reader_skips_noise_lines() {
    let data = "Log Iniciado Por: operador\n\
                10/03/2025 14:22:01 - 001234 consulta\n\
                Por: \\\\totvs\\\\Hoteis\\\\cmnet.exe\n\
                dados";
    let blocks: Vec<_> = BlockReader::new(data.as_bytes()).collect();

    assert_eq!(blocks.len(), 1);
    let block = blocks[0].as_ref().unwrap();
    assert_eq!(block.len(), 2);
}

#[test]
fn test_reader_empty_input() {
    let blocks: Vec<_> = BlockReader::new("".as_bytes()).collect();
    assert_eq!(blocks.len(), 0);
}

#[test]
fn test_reader_windows_line_endings() {
    let data = "10/03/2025 14:22:01 - 001234 consulta\r\n\
                dados\r\n\
                001235 14:22:02 legado\r\n";
    let blocks: Vec<_> = BlockReader::new(data.as_bytes()).collect();

    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].as_ref().unwrap().len(), 2);
    assert_eq!(blocks[0].as_ref().unwrap().all_lines()[1], "dados");
}

#[test]
fn test_reader_mixed_line_endings() {
    let data = "10/03/2025 14:22:01 - 001234 consulta\r\n\
                dados\n\
                10/03/2025 14:22:02 - 001235 outra\r\n\
                Record Count = 1";
    let blocks: Vec<_> = BlockReader::new(data.as_bytes()).collect();

    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].as_ref().unwrap().len(), 2);
    assert_eq!(blocks[1].as_ref().unwrap().len(), 2);
}

#[test]
fn test_reader_matches_batch_segmentation() {
    let data = "preâmbulo\n\
                Log Iniciado Por: operador\n\
                10/03/2025 14:22:01 - 001234 Open: SELECT 1\n\
                FROM DUAL\n\
                001235 14:22:02 legado\n\
                Record Count = 2";

    let streamed: Vec<_> = BlockReader::new(data.as_bytes())
        .map(|r| r.unwrap())
        .collect();
    let lines: Vec<&str> = data.lines().collect();
    let batched = segment(&lines);

    assert_eq!(streamed, batched);
}

#[test]
fn test_reader_noise_only_input() {
    let data = "Log Iniciado Por: a\n\
                Log Iniciado Por: b";
    let blocks: Vec<_> = BlockReader::new(data.as_bytes()).collect();
    assert_eq!(blocks.len(), 0);
}
