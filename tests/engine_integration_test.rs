use bottle_song::{
    sink_for, BottleCount, JsonSink, Language, OutputFormat, Settings, SongConfig, SongEngine,
    SongGenerator, TextSink,
};

fn sing(settings: &Settings, raw: Option<&str>) -> bottle_song::Result<String> {
    let start = settings.bottle_count(raw)?;
    let mut buffer = Vec::new();
    {
        let sink = sink_for(settings.output_format, &mut buffer);
        let mut engine = SongEngine::new(sink, SongGenerator::new(settings.language))
            .with_title(settings.show_title);
        engine.run(start)?;
    }
    Ok(String::from_utf8(buffer).expect("song output is utf-8"))
}

#[test]
fn test_end_to_end_with_default_settings() {
    let output = sing(&Settings::default(), Some("3")).unwrap();
    let verses: Vec<&str> = output.split("\n\n").collect();

    // 標題 + 3 段倒數 + 結尾
    assert_eq!(verses.len(), 5);
    assert_eq!(verses[0], "The \"3 bottles of beer\" song");
    assert!(verses[3].ends_with("no more bottles of beer on the wall."));
    assert!(verses[4].starts_with("No more bottles of beer on the wall"));
}

#[test]
fn test_bad_input_produces_no_output() {
    let err = sing(&Settings::default(), Some("ten")).unwrap_err();
    assert_eq!(
        err.user_friendly_message(),
        "You have passed 'ten' as a number of bottles, but it is not a valid integer number"
    );
}

#[test]
fn test_settings_from_config_file_drive_the_engine() {
    let file = SongConfig::from_toml_str(
        r#"
[song]
default_count = 2
language = "zh"
title = false

[output]
format = "csv"
"#,
    )
    .unwrap();
    let settings = Settings::from_provider(&file);
    assert_eq!(settings.output_format, OutputFormat::Csv);

    let output = sing(&settings, None).unwrap();
    let rows: Vec<&str> = output.lines().collect();
    assert_eq!(rows[0], "verse,line,text");
    assert_eq!(rows.len(), 1 + 3 + 3 + 2);
    assert!(rows.last().unwrap().contains("有2個瓶子裝啤酒放在牆上"));
}

#[test]
fn test_every_format_sings_the_same_verses() {
    let generator = SongGenerator::new(Language::English);

    let mut text = TextSink::new(Vec::new());
    let text_count = SongEngine::new(&mut text, generator)
        .with_title(false)
        .run(BottleCount(4))
        .unwrap();

    let mut json = JsonSink::new(Vec::new());
    let json_count = SongEngine::new(&mut json, generator)
        .run(BottleCount(4))
        .unwrap();

    assert_eq!(text_count, json_count);

    let text_output = String::from_utf8(text.into_inner()).unwrap();
    let document: serde_json::Value = serde_json::from_slice(&json.into_inner()).unwrap();
    let json_lines: Vec<String> = document["verses"]
        .as_array()
        .unwrap()
        .iter()
        .flat_map(|verse| verse["lines"].as_array().unwrap().clone())
        .map(|line| line.as_str().unwrap().to_string())
        .collect();
    let text_lines: Vec<&str> = text_output.lines().filter(|line| !line.is_empty()).collect();

    assert_eq!(text_lines, json_lines);
}
