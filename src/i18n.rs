//! UI Labels
//!
//! Static label dictionaries for the three supported display languages.

use serde::Deserialize;

/// Display language
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Pt,
    Tr,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Pt, Language::Tr];

    /// Lowercase code used as the `<select>` value
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Pt => "pt",
            Language::Tr => "tr",
        }
    }

    /// Short label shown in the language selector
    pub fn short_name(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Pt => "PT",
            Language::Tr => "TR",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }

    pub fn labels(self) -> &'static Labels {
        match self {
            Language::En => &EN,
            Language::Pt => &PT,
            Language::Tr => &TR,
        }
    }
}

/// Every user-facing string in the view
#[derive(Debug, PartialEq, Eq)]
pub struct Labels {
    pub add: &'static str,
    pub placeholder: &'static str,
    pub done: &'static str,
    pub undone: &'static str,
    pub delete: &'static str,
    pub completed: &'static str,
    pub incomplete: &'static str,
    pub theme: &'static str,
    pub language: &'static str,
    pub title: &'static str,
    pub timer: &'static str,
    pub stats: &'static str,
    pub all_tasks: &'static str,
    pub no_tasks: &'static str,
    pub task_complete: &'static str,
    pub progress: &'static str,
}

pub const EN: Labels = Labels {
    add: "Add Task",
    placeholder: "What needs to be done?",
    done: "Complete",
    undone: "Undo",
    delete: "Delete",
    completed: "Completed",
    incomplete: "Pending",
    theme: "Theme",
    language: "Language",
    title: "Multi-Language Todo",
    timer: "Session Time",
    stats: "Progress Stats",
    all_tasks: "All Tasks",
    no_tasks: "No tasks yet. Add one above!",
    task_complete: "Task completed! 🎉",
    progress: "Progress",
};

pub const PT: Labels = Labels {
    add: "Adicionar",
    placeholder: "O que precisa ser feito?",
    done: "Concluir",
    undone: "Desfazer",
    delete: "Excluir",
    completed: "Concluídas",
    incomplete: "Pendentes",
    theme: "Tema",
    language: "Idioma",
    title: "Lista Multi-Idioma",
    timer: "Tempo da Sessão",
    stats: "Estatísticas",
    all_tasks: "Todas as Tarefas",
    no_tasks: "Nenhuma tarefa ainda. Adicione uma acima!",
    task_complete: "Tarefa concluída! 🎉",
    progress: "Progresso",
};

pub const TR: Labels = Labels {
    add: "Ekle",
    placeholder: "Ne yapılması gerekiyor?",
    done: "Tamamla",
    undone: "Geri Al",
    delete: "Sil",
    completed: "Tamamlanan",
    incomplete: "Bekleyen",
    theme: "Tema",
    language: "Dil",
    title: "Çok Dilli Yapılacaklar",
    timer: "Oturum Süresi",
    stats: "İlerlemeler",
    all_tasks: "Tüm Görevler",
    no_tasks: "Henüz görev yok. Yukarıdan bir tane ekleyin!",
    task_complete: "Görev tamamlandı! 🎉",
    progress: "İlerleme",
};
