use readsfq::{CountOptions, LineReader, count_bufread};
use std::io::{BufReader, Cursor};

fn lines(reader: &mut LineReader) -> Vec<Vec<u8>> {
    let mut out = Vec::new();
    let mut buf = Vec::new();
    while reader.read_line(&mut buf).unwrap() > 0 {
        out.push(buf.clone());
    }
    out
}

fn opts(max_line_len: usize) -> CountOptions {
    CountOptions::with_buffer_size(max_line_len).unwrap()
}

#[test]
fn splits_on_all_terminators() {
    let data = "a\nb\r\nc\rd";
    let mut rdr = LineReader::from_bufread(Cursor::new(data), &CountOptions::default());
    assert_eq!(
        lines(&mut rdr),
        vec![b"a\n".to_vec(), b"b\r\n".to_vec(), b"c\r".to_vec(), b"d".to_vec()]
    );
    let ctx = rdr.ctx();
    assert_eq!(ctx.line_num, 4);
    assert_eq!(ctx.byte_pos, data.len() as u64);
}

#[test]
fn blank_lines_are_kept() {
    let mut rdr = LineReader::from_bufread(Cursor::new("\n\r\n\r"), &CountOptions::default());
    assert_eq!(
        lines(&mut rdr),
        vec![b"\n".to_vec(), b"\r\n".to_vec(), b"\r".to_vec()]
    );
}

#[test]
fn terminators_split_across_buffer_refills() {
    // one-byte inner buffer forces a refill between '\r' and '\n'
    let inner = BufReader::with_capacity(1, Cursor::new("ab\r\ncd\r\n\r\nef"));
    let mut rdr = LineReader::from_bufread(inner, &CountOptions::default());
    assert_eq!(
        lines(&mut rdr),
        vec![
            b"ab\r\n".to_vec(),
            b"cd\r\n".to_vec(),
            b"\r\n".to_vec(),
            b"ef".to_vec()
        ]
    );
}

#[test]
fn long_lines_are_split_at_the_limit() {
    let mut rdr = LineReader::from_bufread(Cursor::new("ACGTACGTAC\nGG\n"), &opts(4));
    assert_eq!(
        lines(&mut rdr),
        vec![
            b"ACGT".to_vec(),
            b"ACGT".to_vec(),
            b"AC\n".to_vec(),
            b"GG\n".to_vec()
        ]
    );
}

#[test]
fn crlf_straddling_the_limit_stays_together() {
    let mut rdr = LineReader::from_bufread(Cursor::new("ACG\r\nT\n"), &opts(4));
    assert_eq!(lines(&mut rdr), vec![b"ACG\r\n".to_vec(), b"T\n".to_vec()]);
}

#[test]
fn count_survives_split_sequence_and_quality_lines() {
    let data = "@r1\nACGTACGTAC\n+\n!!!!!!!!!!\n@r2\nACGTACGTAC\n+\n!!!!!!!!!!\n";
    let s = count_bufread(Cursor::new(data), &opts(4)).unwrap();
    assert_eq!(s.reads, 2);
    assert_eq!(s.warnings.total(), 0);
    assert_eq!(s.lines, 16);
}

#[test]
fn count_matches_for_any_buffer_refill_size() {
    let data = "\n@r1\r\nACG\r\nT\r\n+\r\n!!\r\n!!\r\n@r2\rGG\r+\r!!\r";
    for cap in 1..=data.len() {
        let inner = BufReader::with_capacity(cap, Cursor::new(data));
        let s = count_bufread(inner, &CountOptions::default()).unwrap();
        assert_eq!(s.reads, 2, "capacity {cap}");
        assert_eq!(s.warnings.total(), 0, "capacity {cap}");
        assert_eq!(s.bytes, data.len() as u64);
    }
}
