use crate::domain::model::Verse;
use crate::domain::ports::{OutputFormat, VerseSink};
use crate::utils::error::Result;
use serde::Serialize;
use std::io::Write;

/// 純文字輸出，版面與原本的歌一樣：標題後空一行，段落之間空一行
pub struct TextSink<W: Write> {
    writer: W,
    verses_written: usize,
}

impl<W: Write> TextSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            verses_written: 0,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> VerseSink for TextSink<W> {
    fn begin(&mut self, title: Option<&str>) -> Result<()> {
        if let Some(title) = title {
            writeln!(self.writer, "{}", title)?;
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn emit(&mut self, verse: &Verse) -> Result<()> {
        if self.verses_written > 0 {
            writeln!(self.writer)?;
        }
        for line in &verse.lines {
            writeln!(self.writer, "{}", line)?;
        }
        self.verses_written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct VerseRecord<'a> {
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    count: Option<u32>,
    lines: &'a [String],
}

/// 邊唱邊寫的 JSON 文件：`{"title":…,"verses":[` 開頭，每段一行，`finish` 時收尾
pub struct JsonSink<W: Write> {
    writer: W,
    verses_written: usize,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            verses_written: 0,
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> VerseSink for JsonSink<W> {
    fn begin(&mut self, title: Option<&str>) -> Result<()> {
        self.writer.write_all(b"{\"title\":")?;
        serde_json::to_writer(&mut self.writer, &title)?;
        self.writer.write_all(b",\"verses\":[")?;
        Ok(())
    }

    fn emit(&mut self, verse: &Verse) -> Result<()> {
        let separator: &[u8] = if self.verses_written > 0 { b",\n" } else { b"\n" };
        self.writer.write_all(separator)?;
        serde_json::to_writer(
            &mut self.writer,
            &VerseRecord {
                kind: verse.kind.label(),
                count: verse.kind.count(),
                lines: &verse.lines,
            },
        )?;
        self.verses_written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        tracing::debug!("Closing JSON document after {} verses", self.verses_written);
        self.writer.write_all(b"\n]}\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct LineRecord<'a> {
    verse: usize,
    line: usize,
    text: &'a str,
}

/// 每一行歌詞一筆資料：`verse,line,text`（編號從 1 開始，標題不輸出）
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
    verse_number: usize,
}

impl<W: Write> CsvSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(writer),
            verse_number: 0,
        }
    }

    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| crate::utils::error::SongError::IoError(e.into_error()))
    }
}

impl<W: Write> VerseSink for CsvSink<W> {
    fn begin(&mut self, _title: Option<&str>) -> Result<()> {
        Ok(())
    }

    fn emit(&mut self, verse: &Verse) -> Result<()> {
        self.verse_number += 1;
        for (index, text) in verse.lines.iter().enumerate() {
            self.writer.serialize(LineRecord {
                verse: self.verse_number,
                line: index + 1,
                text,
            })?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// 依輸出格式建立對應的 sink
pub fn sink_for<'a, W: Write + 'a>(format: OutputFormat, writer: W) -> Box<dyn VerseSink + 'a> {
    match format {
        OutputFormat::Text => Box::new(TextSink::new(writer)),
        OutputFormat::Json => Box::new(JsonSink::new(writer)),
        OutputFormat::Csv => Box::new(CsvSink::new(writer)),
    }
}
