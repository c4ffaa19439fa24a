use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Localized labels the shell renders. Carried over from the original
/// desktop shell's label tables; the ledger core never touches these.
#[derive(Debug, Clone, Copy)]
pub struct Labels {
    pub title: &'static str,
    pub income: &'static str,
    pub expense: &'static str,
    pub balance: &'static str,
    pub total_income: &'static str,
    pub total_expense: &'static str,
    pub overview_title: &'static str,
    pub table_date: &'static str,
    pub table_type: &'static str,
    pub table_category: &'static str,
    pub table_amount: &'static str,
    pub table_description: &'static str,
    pub status_added: &'static str,
    pub status_cleared: &'static str,
}

const EN: Labels = Labels {
    title: "Budget Manager",
    income: "Income",
    expense: "Expense",
    balance: "Current Balance:",
    total_income: "Total Income:",
    total_expense: "Total Expenses:",
    overview_title: "Financial Overview",
    table_date: "Date",
    table_type: "Type",
    table_category: "Category",
    table_amount: "Amount",
    table_description: "Description",
    status_added: "Transaction added",
    status_cleared: "All transactions cleared",
};

const FA: Labels = Labels {
    title: "مدیریت بودجه",
    income: "درآمد",
    expense: "هزینه",
    balance: "تراز کنونی:",
    total_income: "کل درآمدها:",
    total_expense: "کل هزینه‌ها:",
    overview_title: "نمای کلی مالی",
    table_date: "تاریخ",
    table_type: "نوع",
    table_category: "دسته‌بندی",
    table_amount: "مقدار",
    table_description: "توضیحات",
    status_added: "تراکنش اضافه شد",
    status_cleared: "همه تراکنش‌ها پاک شدند",
};

const ZH: Labels = Labels {
    title: "预算管理器",
    income: "收入",
    expense: "支出",
    balance: "当前余额：",
    total_income: "总收入：",
    total_expense: "总支出：",
    overview_title: "财务概览",
    table_date: "日期",
    table_type: "类型",
    table_category: "类别",
    table_amount: "金额",
    table_description: "描述",
    status_added: "交易已添加",
    status_cleared: "所有交易已清除",
};

const RU: Labels = Labels {
    title: "Менеджер бюджета",
    income: "Доход",
    expense: "Расход",
    balance: "Текущий баланс:",
    total_income: "Общий доход:",
    total_expense: "Общие расходы:",
    overview_title: "Финансовый обзор",
    table_date: "Дата",
    table_type: "Тип",
    table_category: "Категория",
    table_amount: "Сумма",
    table_description: "Описание",
    status_added: "Транзакция добавлена",
    status_cleared: "Все транзакции очищены",
};

static TABLES: Lazy<HashMap<&'static str, Labels>> = Lazy::new(|| {
    HashMap::from([("en", EN), ("fa", FA), ("zh", ZH), ("ru", RU)])
});

/// Looks up the label table for a locale, falling back to English.
pub fn labels(locale: &str) -> &'static Labels {
    TABLES.get(locale).unwrap_or(&EN)
}
