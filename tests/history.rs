use multicalc::history::{History, HistoryRecord, HistorySink};

#[test]
fn test_cap_evicts_oldest() {
    let mut history = History::new();
    for i in 1..=25 {
        history.record(HistoryRecord::calculation(&format!("#{}", i), "0"));
    }

    let want: Vec<String> = (6..=25).map(|i| format!("#{} = 0", i)).collect();
    assert_eq!(history.len(), 20);
    assert_eq!(history.iter().collect::<Vec<_>>(), want);
}

#[test]
fn test_save_and_reload() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let mut history = History::new();
    history.record(HistoryRecord::calculation("2 + 2", "4"));
    history.record(HistoryRecord::labelled("Age", "2001-09-09", "25 years"));

    let saved = serde_json::to_string(&history)?;
    assert_eq!(saved, r#"["2 + 2 = 4","Age: 2001-09-09 -> 25 years"]"#);

    let reloaded: History = serde_json::from_str(&saved)?;
    assert_eq!(reloaded, history);

    Ok(())
}

#[test]
fn test_reload_trims_to_capacity() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let lines: Vec<String> = (0..30).map(|i| i.to_string()).collect();
    let reloaded: History = serde_json::from_str(&serde_json::to_string(&lines)?)?;

    assert_eq!(reloaded.len(), 20);
    assert_eq!(reloaded.get(0), Some("10"));

    Ok(())
}
