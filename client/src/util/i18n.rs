//! Translation lookup for UI strings.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app root keeps the active `Language` in `UiState`; pages read the matching
//! [`Translations`] table through [`translations`]. Tables are static and
//! read-only, so lookups never allocate.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

/// Languages with a full translation table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    En,
    Zh,
}

impl Language {
    pub const ALL: [Self; 2] = [Self::En, Self::Zh];

    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
        }
    }

    /// Name shown in the language switcher, in its own script.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Zh => "中文",
        }
    }

    /// Resolve a BCP 47 tag such as `zh-CN` by its primary subtag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match primary_subtag(tag).as_str() {
            "en" => Some(Self::En),
            "zh" => Some(Self::Zh),
            _ => None,
        }
    }
}

/// Lowercased primary subtag: `"zh-CN"` -> `"zh"`.
#[must_use]
pub fn primary_subtag(tag: &str) -> String {
    tag.trim().split(['-', '_']).next().unwrap_or_default().to_ascii_lowercase()
}

/// Best-effort browser language; English off-browser or when unsupported.
pub fn browser_language() -> Language {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.navigator().language())
            .and_then(|tag| Language::from_tag(&tag))
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Language::default()
    }
}

#[derive(Debug)]
pub struct NavText {
    pub problems: &'static str,
    pub contests: &'static str,
    pub submissions: &'static str,
    pub ide: &'static str,
    pub login: &'static str,
    pub register: &'static str,
    pub profile: &'static str,
    pub logout: &'static str,
}

#[derive(Debug)]
pub struct WelcomeText {
    pub title: &'static str,
    pub subtitle: &'static str,
}

#[derive(Debug)]
pub struct ProblemsText {
    pub heading: &'static str,
    pub recent: &'static str,
    pub id: &'static str,
    pub title: &'static str,
    pub difficulty: &'static str,
    pub acceptance: &'static str,
    pub submissions: &'static str,
    pub easy: &'static str,
    pub medium: &'static str,
    pub hard: &'static str,
}

#[derive(Debug)]
pub struct ContestsText {
    pub heading: &'static str,
    pub starts: &'static str,
    pub ends: &'static str,
    pub participants: &'static str,
    pub organizer: &'static str,
    pub upcoming: &'static str,
    pub ongoing: &'static str,
    pub ended: &'static str,
}

#[derive(Debug)]
pub struct SubmissionsText {
    pub heading: &'static str,
    pub problem: &'static str,
    pub language: &'static str,
    pub status: &'static str,
    pub runtime: &'static str,
    pub memory: &'static str,
    pub submitted_at: &'static str,
}

#[derive(Debug)]
pub struct AuthText {
    pub login_title: &'static str,
    pub register_title: &'static str,
    pub email: &'static str,
    pub password: &'static str,
    pub confirm_password: &'static str,
    pub username: &'static str,
    pub login_button: &'static str,
    pub register_button: &'static str,
    pub working: &'static str,
    pub no_account: &'static str,
    pub have_account: &'static str,
    pub register_here: &'static str,
    pub login_here: &'static str,
    pub registered: &'static str,
    pub missing_fields: &'static str,
    pub password_mismatch: &'static str,
    pub invalid_email: &'static str,
}

#[derive(Debug)]
pub struct ErrorText {
    pub invalid_credentials: &'static str,
    pub bad_request: &'static str,
    pub server: &'static str,
    pub unreachable: &'static str,
    pub unexpected: &'static str,
}

#[derive(Debug)]
pub struct IdeText {
    pub heading: &'static str,
    pub run: &'static str,
    pub running: &'static str,
    pub clear: &'static str,
    pub editor: &'static str,
    pub console: &'static str,
    pub waiting: &'static str,
    pub no_output: &'static str,
    pub error_prefix: &'static str,
}

/// One language's complete string table.
#[derive(Debug)]
pub struct Translations {
    pub title: &'static str,
    pub issues: &'static str,
    pub feedback: &'static str,
    pub retry: &'static str,
    pub offline: &'static str,
    pub not_found: &'static str,
    pub back_home: &'static str,
    /// Footer template; `{year}` is replaced by [`footer`].
    pub footer: &'static str,
    pub nav: NavText,
    pub welcome: WelcomeText,
    pub problems: ProblemsText,
    pub contests: ContestsText,
    pub submissions: SubmissionsText,
    pub auth: AuthText,
    pub errors: ErrorText,
    pub ide: IdeText,
}

static EN: Translations = Translations {
    title: "Hydro",
    issues: "Having issues? ",
    feedback: "send feedback",
    retry: "Retry now",
    offline: "Cannot reach the judge server. Retrying in {secs}s.",
    not_found: "Page not found.",
    back_home: "Back to home",
    footer: "Hydro OJ © {year}",
    nav: NavText {
        problems: "Problems",
        contests: "Contests",
        submissions: "Submissions",
        ide: "IDE",
        login: "Login",
        register: "Register",
        profile: "Profile",
        logout: "Logout",
    },
    welcome: WelcomeText {
        title: "Welcome to Hydro",
        subtitle: "A modern online judge system for programming contests and practice",
    },
    problems: ProblemsText {
        heading: "Problem Set",
        recent: "Recent Problems",
        id: "#",
        title: "Title",
        difficulty: "Difficulty",
        acceptance: "Acceptance",
        submissions: "Submissions",
        easy: "Easy",
        medium: "Medium",
        hard: "Hard",
    },
    contests: ContestsText {
        heading: "Contests",
        starts: "Starts",
        ends: "Ends",
        participants: "Participants",
        organizer: "Organizer",
        upcoming: "Upcoming",
        ongoing: "Ongoing",
        ended: "Ended",
    },
    submissions: SubmissionsText {
        heading: "My Submissions",
        problem: "Problem",
        language: "Language",
        status: "Status",
        runtime: "Runtime",
        memory: "Memory",
        submitted_at: "Submitted",
    },
    auth: AuthText {
        login_title: "Login to Hydro",
        register_title: "Create an Account",
        email: "Email",
        password: "Password",
        confirm_password: "Confirm Password",
        username: "Username",
        login_button: "Login",
        register_button: "Register",
        working: "Please wait...",
        no_account: "Don't have an account?",
        have_account: "Already have an account?",
        register_here: "Register here",
        login_here: "Login here",
        registered: "Registration successful! Please log in.",
        missing_fields: "Please fill in every field.",
        password_mismatch: "The passwords do not match.",
        invalid_email: "Please enter a valid email address.",
    },
    errors: ErrorText {
        invalid_credentials: "Incorrect username or password.",
        bad_request: "The request was rejected. Please check your input.",
        server: "Server error, please try again later.",
        unreachable: "Cannot reach the server. Please check your network.",
        unexpected: "Something went wrong, please try again.",
    },
    ide: IdeText {
        heading: "Online IDE",
        run: "Run",
        running: "Running...",
        clear: "Clear console",
        editor: "Code editor",
        console: "Console output",
        waiting: "Waiting for output...",
        no_output: "Program finished with no output.",
        error_prefix: "Error: ",
    },
};

static ZH: Translations = Translations {
    title: "Hydro",
    issues: "服务器断线? ",
    feedback: "发送反馈",
    retry: "立即重试",
    offline: "无法连接评测服务器，{secs} 秒后重试。",
    not_found: "页面不存在。",
    back_home: "返回首页",
    footer: "Hydro 在线评测 © {year}",
    nav: NavText {
        problems: "题目",
        contests: "比赛",
        submissions: "提交记录",
        ide: "在线IDE",
        login: "登录",
        register: "注册",
        profile: "个人中心",
        logout: "退出登录",
    },
    welcome: WelcomeText {
        title: "欢迎使用 Hydro",
        subtitle: "现代化的编程竞赛与练习在线评测系统",
    },
    problems: ProblemsText {
        heading: "题库",
        recent: "近期题目",
        id: "编号",
        title: "标题",
        difficulty: "难度",
        acceptance: "通过率",
        submissions: "提交数",
        easy: "简单",
        medium: "中等",
        hard: "困难",
    },
    contests: ContestsText {
        heading: "比赛",
        starts: "开始时间",
        ends: "结束时间",
        participants: "参赛人数",
        organizer: "主办方",
        upcoming: "即将开始",
        ongoing: "进行中",
        ended: "已结束",
    },
    submissions: SubmissionsText {
        heading: "我的提交",
        problem: "题目",
        language: "语言",
        status: "状态",
        runtime: "运行时间",
        memory: "内存",
        submitted_at: "提交时间",
    },
    auth: AuthText {
        login_title: "登录 Hydro",
        register_title: "创建账户",
        email: "电子邮箱",
        password: "密码",
        confirm_password: "确认密码",
        username: "用户名",
        login_button: "登录",
        register_button: "注册",
        working: "请稍候...",
        no_account: "没有账户？",
        have_account: "已有账户？",
        register_here: "立即注册",
        login_here: "立即登录",
        registered: "注册成功！请登录您的账号",
        missing_fields: "请填写所有字段",
        password_mismatch: "两次输入的密码不匹配",
        invalid_email: "请输入有效的电子邮箱",
    },
    errors: ErrorText {
        invalid_credentials: "用户名或密码错误",
        bad_request: "请求参数错误",
        server: "服务器错误，请稍后再试",
        unreachable: "无法连接到服务器，请检查网络",
        unexpected: "操作失败，请重试",
    },
    ide: IdeText {
        heading: "在线IDE",
        run: "运行",
        running: "运行中...",
        clear: "清空控制台",
        editor: "代码编辑器",
        console: "控制台输出",
        waiting: "等待输出...",
        no_output: "程序执行完成，没有输出",
        error_prefix: "错误: ",
    },
};

/// Table for `language`.
#[must_use]
pub fn table(language: Language) -> &'static Translations {
    match language {
        Language::En => &EN,
        Language::Zh => &ZH,
    }
}

/// Table for an arbitrary language tag, falling back to English.
#[must_use]
pub fn translations(tag: &str) -> &'static Translations {
    table(Language::from_tag(tag).unwrap_or_default())
}

/// Render the footer template for `year`.
#[must_use]
pub fn footer(t: &Translations, year: i64) -> String {
    t.footer.replace("{year}", &year.to_string())
}

/// Render the offline banner for a retry `secs` seconds away.
#[must_use]
pub fn offline_notice(t: &Translations, secs: u64) -> String {
    t.offline.replace("{secs}", &secs.to_string())
}

const CONNECTING_FALLBACK: &str = "Connecting to judge server...";

const CONNECTING_MESSAGES: [(&str, &str); 14] = [
    ("zh", "正在连接服务器..."),
    ("zh-CN", "正在连接服务器..."),
    ("zh-TW", "正在連接伺服器..."),
    ("ja", "サーバーに接続中..."),
    ("ko", "서버에 연결 중..."),
    ("en", "Connecting to server..."),
    ("es", "Conectando al servidor..."),
    ("fr", "Connexion au serveur..."),
    ("de", "Verbindung zum Server..."),
    ("ru", "Подключение к серверу..."),
    ("pt", "Conectando ao servidor..."),
    ("it", "Connessione al server..."),
    ("ar", "جارٍ الاتصال بالخادم..."),
    ("hi", "सर्वर से कनेक्ट हो रहा है..."),
];

/// Loading-screen message for a raw browser tag. Covers more languages than
/// the full tables; the primary subtag wins over the exact tag.
#[must_use]
pub fn connecting_message(tag: &str) -> &'static str {
    let lookup = |key: &str| CONNECTING_MESSAGES.iter().find(|(k, _)| *k == key).map(|(_, v)| *v);
    lookup(&primary_subtag(tag))
        .or_else(|| lookup(tag.trim()))
        .unwrap_or(CONNECTING_FALLBACK)
}

/// Tag every server render uses; the browser switches after hydration.
pub const SERVER_LANGUAGE_TAG: &str = "en";

/// Raw browser language tag, used for the wider connecting-message table.
pub fn browser_language_tag() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.navigator().language())
            .unwrap_or_else(|| SERVER_LANGUAGE_TAG.to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        SERVER_LANGUAGE_TAG.to_owned()
    }
}
