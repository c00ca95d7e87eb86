use crate::search::PickaxeGroup;
use comfy_table::presets::{UTF8_FULL, UTF8_HORIZONTAL_ONLY};
use comfy_table::Table;
use std::fmt;
use std::io::{self, Write};

/// 表格样式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableStyle {
    /// 完整边框
    #[default]
    Bordered,
    /// 无竖线、无内边距
    Raw,
}

impl TableStyle {
    pub fn from_raw_flag(raw: bool) -> Self {
        if raw {
            TableStyle::Raw
        } else {
            TableStyle::Bordered
        }
    }
}

/// 结果分组的表头
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupLabel {
    pub hash: String,
    pub date: String,
    pub file: Option<String>,
    pub parent: Option<String>,
}

impl fmt::Display for GroupLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {}", self.date, self.hash)?;
        if let Some(file) = &self.file {
            write!(f, " | {}", file)?;
        }
        if let Some(parent) = &self.parent {
            write!(f, " | parent {}", parent)?;
        }
        Ok(())
    }
}

/// 一个提交（或提交中的一个文件）的匹配结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultGroup {
    pub label: GroupLabel,
    pub excerpt: String,
}

/// 把结果分组渲染成表格写入输出
pub struct Presenter<W: Write> {
    out: W,
    style: TableStyle,
}

impl Presenter<io::Stdout> {
    pub fn stdout(style: TableStyle) -> Self {
        Self::new(io::stdout(), style)
    }
}

impl<W: Write> Presenter<W> {
    pub fn new(out: W, style: TableStyle) -> Self {
        Self { out, style }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn render<S: AsRef<str>>(&self, header: &str, rows: &[S]) -> String {
        let mut table = Table::new();
        match self.style {
            TableStyle::Bordered => {
                table.load_preset(UTF8_FULL);
            }
            TableStyle::Raw => {
                table.load_preset(UTF8_HORIZONTAL_ONLY);
            }
        }
        table.set_header(vec![header]);
        for row in rows {
            table.add_row(vec![row.as_ref()]);
        }
        if self.style == TableStyle::Raw {
            for column in table.column_iter_mut() {
                column.set_padding((0, 0));
            }
        }
        table.to_string()
    }

    fn write_table(&mut self, rendered: &str) -> io::Result<()> {
        writeln!(self.out, "{}", rendered)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn emit_group(&mut self, group: &ResultGroup) -> io::Result<()> {
        let rendered = self.render(&group.label.to_string(), &[group.excerpt.as_str()]);
        self.write_table(&rendered)
    }

    pub fn emit_pickaxe(&mut self, group: &PickaxeGroup) -> io::Result<()> {
        let rendered = self.render(&group.label(), &group.files);
        self.write_table(&rendered)
    }
}
