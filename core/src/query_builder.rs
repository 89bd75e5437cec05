use crate::error::{Result, SqlSelectError};
use crate::pagination::Pagination;
use std::fmt;
use std::str::FromStr;

/// 条件类型：AND 或 OR
///
/// 同一个 where 子句中只能使用其中一种，未调用 and / or 之前为未设置。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionType {
    And,
    Or,
}

impl ConditionType {
    fn keyword(self) -> &'static str {
        match self {
            ConditionType::And => "and",
            ConditionType::Or => "or",
        }
    }
}

/// 排序方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = SqlSelectError;

    /// 忽略大小写匹配 asc / desc
    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(SortOrder::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(SortOrder::Desc)
        } else {
            Err(SqlSelectError::InvalidArgument(format!(
                "order direction must be asc or desc, got '{}'",
                s
            )))
        }
    }
}

/// SELECT 语句构建器
///
/// 所有片段按原样拼接，不做转义，也不做 SQL 语法检查，调用方需自行保证注入安全。
/// 子句顺序固定为 WHERE、GROUP BY、ORDER BY、LIMIT。
///
/// ```
/// use sqlselect::QueryBuilder;
///
/// let mut builder = QueryBuilder::new("users");
/// builder.add_column("id").add_column("name");
/// builder.where_("age > ?").and("active = 1")?;
/// builder.order_by("name", "asc")?.limit(0, 20);
///
/// assert_eq!(
///     builder.build()?,
///     "select id, name from users where age > ? and active = 1 order by name asc limit 0, 20"
/// );
/// # Ok::<(), sqlselect::SqlSelectError>(())
/// ```
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    table_name: String,
    columns: String,
    where_text: String,
    // 当前 where 子句已使用的连接方式
    logic_type: Option<ConditionType>,
    group_by: String,
    order_by: String,
    limit: String,
}

/// 以 ", " 为分隔追加
fn push_list_item(list: &mut String, item: &str) {
    if !list.is_empty() {
        list.push_str(", ");
    }
    list.push_str(item);
}

impl QueryBuilder {
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            columns: String::new(),
            where_text: String::new(),
            logic_type: None,
            group_by: String::new(),
            order_by: String::new(),
            limit: String::new(),
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn has_columns(&self) -> bool {
        !self.columns.is_empty()
    }

    pub fn has_conditions(&self) -> bool {
        !self.where_text.is_empty()
    }

    pub fn logic_type(&self) -> Option<ConditionType> {
        self.logic_type
    }

    /// 添加需要查询的列（链式调用，可多次调用添加多个列）
    pub fn add_column(&mut self, column: &str) -> &mut Self {
        push_list_item(&mut self.columns, column);
        self
    }

    pub fn clear_columns(&mut self) -> &mut Self {
        self.columns.clear();
        self
    }

    /// 查询数量：将查询列替换为 count(*)
    pub fn count(&mut self) -> &mut Self {
        self.columns.clear();
        self.columns.push_str("count(*)");
        self
    }

    /// 设置 where 条件
    ///
    /// 会覆盖之前的 where 子句以及已经追加的 and / or 条件。
    pub fn where_(&mut self, clause: &str) -> &mut Self {
        self.where_text.clear();
        self.where_text.push_str("where ");
        self.where_text.push_str(clause);
        self.logic_type = None;
        self
    }

    /// 追加 `and <clause>`，必须先调用 where，且不能与 or 混用
    pub fn and(&mut self, clause: &str) -> Result<&mut Self> {
        self.append_condition(ConditionType::And, clause)
    }

    /// 追加 `or <clause>`，必须先调用 where，且不能与 and 混用
    pub fn or(&mut self, clause: &str) -> Result<&mut Self> {
        self.append_condition(ConditionType::Or, clause)
    }

    fn append_condition(
        &mut self,
        condition_type: ConditionType,
        clause: &str,
    ) -> Result<&mut Self> {
        let keyword = condition_type.keyword();

        if self.where_text.is_empty() {
            debug_log!("[{}] rejected: where clause is empty", keyword);
            return Err(SqlSelectError::PreconditionViolation(format!(
                "where must be called before {}",
                keyword
            )));
        }

        if let Some(current) = self.logic_type {
            if current != condition_type {
                debug_log!(
                    "[{}] rejected: chain already uses {}",
                    keyword,
                    current.keyword()
                );
                return Err(SqlSelectError::PreconditionViolation(
                    "and and or cannot be mixed in the same where clause".to_string(),
                ));
            }
        }

        self.logic_type = Some(condition_type);
        self.where_text.push(' ');
        self.where_text.push_str(keyword);
        self.where_text.push(' ');
        self.where_text.push_str(clause);
        Ok(self)
    }

    /// 添加 GROUP BY 字段（链式调用，可多次调用添加多个字段）
    pub fn group_by(&mut self, field: &str) -> &mut Self {
        push_list_item(&mut self.group_by, field);
        self
    }

    /// 添加排序字段，`direction` 忽略大小写，只能为 asc 或 desc
    ///
    /// 排序方向按传入的原样写入 SQL。
    pub fn order_by(&mut self, field: &str, direction: &str) -> Result<&mut Self> {
        direction.parse::<SortOrder>()?;
        push_list_item(&mut self.order_by, &format!("{} {}", field, direction));
        Ok(self)
    }

    pub fn order_by_sort(&mut self, field: &str, order: SortOrder) -> &mut Self {
        push_list_item(&mut self.order_by, &format!("{} {}", field, order));
        self
    }

    /// `limit offset, count`，重复调用时覆盖之前的值
    pub fn limit(&mut self, offset: i64, count: i64) -> &mut Self {
        self.limit = format!("limit {}, {}", offset, count);
        self
    }

    /// 等效于 `limit(0, count)`
    pub fn limit_count(&mut self, count: i64) -> &mut Self {
        self.limit(0, count)
    }

    pub fn paginate<P: Pagination + ?Sized>(&mut self, page: &P) -> &mut Self {
        self.limit(page.from_index(), page.page_size())
    }

    /// 生成 SQL 语句
    ///
    /// 未指定任何查询列时返回 [`SqlSelectError::InvalidState`]。多次调用结果相同。
    pub fn build(&self) -> Result<String> {
        if self.columns.is_empty() {
            return Err(SqlSelectError::InvalidState(
                "at least one column must be selected".to_string(),
            ));
        }

        let mut sql = String::with_capacity(
            32 + self.columns.len()
                + self.table_name.len()
                + self.where_text.len()
                + self.group_by.len()
                + self.order_by.len()
                + self.limit.len(),
        );

        sql.push_str("select ");
        sql.push_str(&self.columns);
        sql.push_str(" from ");
        sql.push_str(&self.table_name);

        if !self.where_text.is_empty() {
            sql.push(' ');
            sql.push_str(&self.where_text);
        }

        if !self.group_by.is_empty() {
            sql.push_str(" group by ");
            sql.push_str(&self.group_by);
        }

        if !self.order_by.is_empty() {
            sql.push_str(" order by ");
            sql.push_str(&self.order_by);
        }

        if !self.limit.is_empty() {
            sql.push(' ');
            sql.push_str(&self.limit);
        }

        debug_log!("[BUILD] Table: {}", self.table_name);
        debug_log!("[BUILD] SQL: {}", sql);
        Ok(sql)
    }
}

/// 等同于 [`QueryBuilder::build`]
///
/// 未指定查询列时返回 `fmt::Error`，此时 `to_string()` 会 panic；
/// 需要处理该情况请使用 `String::try_from(&builder)`。
impl fmt::Display for QueryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sql = self.build().map_err(|_| fmt::Error)?;
        f.write_str(&sql)
    }
}

impl TryFrom<&QueryBuilder> for String {
    type Error = SqlSelectError;

    fn try_from(builder: &QueryBuilder) -> Result<Self> {
        builder.build()
    }
}
