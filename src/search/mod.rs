/// 提交选择
pub mod selector;

/// diff 与文件内容获取
pub mod fetcher;

/// 匹配摘录与强调
pub mod extract;

/// pickaxe 历史搜索输出解析
pub mod pickaxe;

pub use extract::{Extractor, MatchWindow};
pub use fetcher::{ContentFetcher, DiffText, FileText};
pub use pickaxe::{parse_pickaxe, PickaxeGroup};
pub use selector::HashSelection;
