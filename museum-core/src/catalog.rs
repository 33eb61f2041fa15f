//! The static content catalog: exhibition rooms, prophet timeline, and
//! manuscript gallery.
//!
//! The catalog is fixture data, immutable for the process lifetime. The
//! rest of the crate only reads it; there are no create/update/delete
//! operations.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Badge color of a manuscript category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryColor {
    Emerald,
    Blue,
    Amber,
    Purple,
    Rose,
}

impl CategoryColor {
    /// sRGB components for rendering the category badge.
    pub fn rgb(&self) -> [u8; 3] {
        match self {
            CategoryColor::Emerald => [16, 185, 129],
            CategoryColor::Blue => [59, 130, 246],
            CategoryColor::Amber => [245, 158, 11],
            CategoryColor::Purple => [168, 85, 247],
            CategoryColor::Rose => [244, 63, 94],
        }
    }
}

/// Background gradient of a room card header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gradient {
    pub from: [u8; 3],
    pub to: [u8; 3],
}

/// An exhibit inside a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomItem {
    pub icon: String,
    pub title: String,
    pub description: String,
}

impl RoomItem {
    /// Text spoken when this item's narration control is activated.
    pub fn narration_text(&self) -> String {
        format!("{}. {}", self.title, self.description)
    }
}

/// A virtual exhibition room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: u32,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub long_description: String,
    pub icon: String,
    pub gradient: Gradient,
    pub items: Vec<RoomItem>,
}

impl Room {
    /// The room detail header narrates the long description verbatim.
    pub fn narration_text(&self) -> &str {
        &self.long_description
    }
}

/// An entry in the prophet timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prophet {
    pub id: u32,
    pub arabic_name: String,
    pub period: String,
    pub icon: String,
    pub description: String,
    pub details: String,
}

impl Prophet {
    pub fn narration_text(&self) -> String {
        format!("{}. {}", self.arabic_name, self.details)
    }
}

/// A manuscript in the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manuscript {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub period: String,
    pub category: String,
    pub category_color: CategoryColor,
    pub description: String,
    pub details: String,
}

impl Manuscript {
    pub fn narration_text(&self) -> String {
        format!("{}. من تأليف {}. {}", self.title, self.author, self.details)
    }
}

/// The complete read-only content catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub rooms: Vec<Room>,
    pub prophets: Vec<Prophet>,
    pub manuscripts: Vec<Manuscript>,
}

static CATALOG: Lazy<Catalog> = Lazy::new(Catalog::build);

impl Catalog {
    /// The process-wide catalog instance.
    pub fn get() -> &'static Catalog {
        &CATALOG
    }

    pub fn room(&self, id: u32) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    pub fn prophet(&self, id: u32) -> Option<&Prophet> {
        self.prophets.iter().find(|p| p.id == id)
    }

    pub fn manuscript(&self, id: u32) -> Option<&Manuscript> {
        self.manuscripts.iter().find(|m| m.id == id)
    }

    fn build() -> Catalog {
        Catalog {
            rooms: build_rooms(),
            prophets: build_prophets(),
            manuscripts: build_manuscripts(),
        }
    }
}

fn item(icon: &str, title: &str, description: &str) -> RoomItem {
    RoomItem {
        icon: icon.to_string(),
        title: title.to_string(),
        description: description.to_string(),
    }
}

fn build_rooms() -> Vec<Room> {
    vec![
        Room {
            id: 1,
            title: "قاعة العمارة الإسلامية".to_string(),
            subtitle: "روائع البناء والعمران".to_string(),
            description: "اكتشف أشهر المساجد والقصور والمدارس التي شيدتها الحضارة الإسلامية."
                .to_string(),
            long_description: "العمارة الإسلامية فن جمع بين الهندسة والجمال، من قبة الصخرة في القدس إلى قصر الحمراء في غرناطة. استخدم المعماريون المسلمون القباب والأقواس والمقرنصات والزخارف الهندسية لإبداع مبانٍ ما زالت تدهش العالم حتى اليوم.".to_string(),
            icon: "🕌".to_string(),
            gradient: Gradient {
                from: [13, 42, 77],
                to: [9, 70, 66],
            },
            items: vec![
                item(
                    "🕌",
                    "قبة الصخرة",
                    "أقدم أثر معماري إسلامي باقٍ، بناه عبد الملك بن مروان في القدس سنة 72 هـ، وتميز بقبته الذهبية وزخارفه الفسيفسائية.",
                ),
                item(
                    "🏛",
                    "جامع قرطبة",
                    "من أعظم مساجد الأندلس، اشتهر بأقواسه الحمراء والبيضاء المتراكبة وصحنه الواسع وأروقته الممتدة.",
                ),
                item(
                    "🏫",
                    "المدرسة المستنصرية",
                    "أنشئت في بغداد سنة 631 هـ لتدريس المذاهب الأربعة، وكانت من أوائل الجامعات الجامعة للعلوم في العالم.",
                ),
                item(
                    "🏰",
                    "قصر الحمراء",
                    "تحفة العمارة الأندلسية في غرناطة، تتكامل فيه النقوش الجصية والماء والحدائق في تناغم فريد.",
                ),
            ],
        },
        Room {
            id: 2,
            title: "قاعة العلوم والفلك".to_string(),
            subtitle: "إرث العلماء المسلمين".to_string(),
            description: "أدوات واكتشافات غيرت فهم الإنسان للكون والأرض.".to_string(),
            long_description: "أسس علماء المسلمين لمنهج تجريبي رصين، فرصدوا النجوم وقاسوا محيط الأرض ورسموا خرائط العالم. من مرصد المأمون في بغداد إلى مرصد مراغة، كانت المراصد الإسلامية مراكز بحث عالمية قرونًا طويلة.".to_string(),
            icon: "🔭".to_string(),
            gradient: Gradient {
                from: [22, 30, 72],
                to: [58, 32, 84],
            },
            items: vec![
                item(
                    "🧭",
                    "الأسطرلاب",
                    "حاسوب فلكي قديم لقياس ارتفاع النجوم وتحديد الوقت واتجاه القبلة، طوره المسلمون وأتقنوا صناعته.",
                ),
                item(
                    "🗺",
                    "خرائط الإدريسي",
                    "رسم الشريف الإدريسي خريطة للعالم في كتابه نزهة المشتاق ظلت مرجعًا للجغرافيين أكثر من ثلاثة قرون.",
                ),
                item(
                    "🌌",
                    "مرصد مراغة",
                    "أنشأه نصير الدين الطوسي سنة 657 هـ، وضمت خزانته أكثر من أربعمائة ألف مجلد وأدق أدوات الرصد في عصره.",
                ),
                item(
                    "⏳",
                    "ساعة الجزري المائية",
                    "من عجائب الهندسة الميكانيكية، صممها بديع الزمان الجزري ووصفها في كتابه الجامع بين العلم والعمل النافع.",
                ),
            ],
        },
        Room {
            id: 3,
            title: "قاعة الخط العربي".to_string(),
            subtitle: "جماليات الحرف والكلمة".to_string(),
            description: "رحلة مع أشهر الخطوط العربية وفنون الزخرفة والتذهيب.".to_string(),
            long_description: "ارتقى الخط العربي من وسيلة تدوين إلى فن قائم بذاته، فتنوعت مدارسه بين الكوفي الهندسي والنسخ الواضح والثلث المهيب. وزين الخطاطون المصاحف والعمائر بآيات تحولت بأيديهم إلى لوحات خالدة.".to_string(),
            icon: "✒".to_string(),
            gradient: Gradient {
                from: [61, 39, 20],
                to: [87, 62, 16],
            },
            items: vec![
                item(
                    "📐",
                    "الخط الكوفي",
                    "أقدم الخطوط العربية، يتميز بزواياه الحادة واستقامة حروفه، وكتبت به المصاحف الأولى.",
                ),
                item(
                    "🖋",
                    "خط النسخ",
                    "خط واضح متزن وضع قواعده ابن مقلة، وصار الخط الأول لنسخ الكتب والمصاحف لسهولة قراءته.",
                ),
                item(
                    "🖌",
                    "خط الثلث",
                    "أصعب الخطوط وأجملها، تتداخل حروفه وتتراكب في تكوينات بديعة تزين المساجد والعناوين.",
                ),
                item(
                    "✨",
                    "فن التذهيب",
                    "تزيين صفحات المخطوطات بماء الذهب والألوان النباتية في أطر وزخارف دقيقة تحيط بالنص.",
                ),
            ],
        },
        Room {
            id: 4,
            title: "قاعة الطب والصيدلة".to_string(),
            subtitle: "علم يداوي الأبدان".to_string(),
            description: "البيمارستانات والأطباء الذين وضعوا أسس الطب الحديث.".to_string(),
            long_description: "أنشأ المسلمون البيمارستانات مستشفيات تعليمية مجانية يفصل فيها المرضى بحسب عللهم، وألف أطباؤهم موسوعات بقيت تدرس في جامعات أوروبا حتى القرن السابع عشر، ووضع الزهراوي أدوات جراحية ما زال بعضها مستعملًا بصورته اليوم.".to_string(),
            icon: "⚕".to_string(),
            gradient: Gradient {
                from: [12, 59, 46],
                to: [16, 44, 76],
            },
            items: vec![
                item(
                    "🏥",
                    "البيمارستان العضدي",
                    "من أعظم مستشفيات بغداد، عمل فيه أربعة وعشرون طبيبًا وكان يضم صيدلية ومكتبة وقاعات للتدريس.",
                ),
                item(
                    "🔬",
                    "أدوات الزهراوي",
                    "وصف أبو القاسم الزهراوي في كتابه التصريف نحو مائتي أداة جراحية ابتكر كثيرًا منها بنفسه.",
                ),
                item(
                    "🌿",
                    "علم الأدوية",
                    "جمع ابن البيطار في مفرداته أكثر من ألف وأربعمائة دواء نباتي وحيواني ومعدني مع منافعها وطرق تركيبها.",
                ),
            ],
        },
        Room {
            id: 5,
            title: "قاعة الفنون والزخرفة".to_string(),
            subtitle: "إبداع بلا حدود".to_string(),
            description: "الأرابيسك والخزف والفسيفساء والسجاد في أبهى صورها.".to_string(),
            long_description: "ابتكر الفنانون المسلمون زخارف هندسية ونباتية لا نهائية التكرار عرفت بالأرابيسك، وأبدعوا في الخزف ذي البريق المعدني والفسيفساء الملونة والسجاد المنسوج بعقد دقيقة تحكي قصص المدن التي صنعته.".to_string(),
            icon: "🎨".to_string(),
            gradient: Gradient {
                from: [72, 24, 48],
                to: [36, 24, 72],
            },
            items: vec![
                item(
                    "🌀",
                    "فن الأرابيسك",
                    "تكوينات هندسية ونباتية متشابكة تمتد بلا نهاية، ترمز إلى اللانهاية وتزين العمائر والتحف.",
                ),
                item(
                    "🏺",
                    "الخزف ذو البريق المعدني",
                    "تقنية عراقية ابتكرت في سامراء تمنح الخزف لمعانًا ذهبيًا ساحرًا انتقلت لاحقًا إلى الأندلس.",
                ),
                item(
                    "🧵",
                    "السجاد الإسلامي",
                    "نسج الحرفيون سجادًا بملايين العقد اليدوية تتوسطه نقوش المحراب والحدائق، فصار من أنفس الهدايا بين الملوك.",
                ),
            ],
        },
        Room {
            id: 6,
            title: "قاعة الملاحة والتجارة".to_string(),
            subtitle: "طرق تصل المشرق بالمغرب".to_string(),
            description: "سفن وقوافل حملت البضائع والعلوم عبر القارات.".to_string(),
            long_description: "جاب البحارة المسلمون المحيط الهندي بسفنهم الشراعية مهتدين بالنجوم والبوصلة، وامتدت طرق القوافل من الأندلس إلى الصين تحمل الحرير والتوابل والورق، ومعها الكتب والأفكار التي وصلت حضارات العالم ببعضها.".to_string(),
            icon: "⛵".to_string(),
            gradient: Gradient {
                from: [10, 46, 74],
                to: [8, 69, 84],
            },
            items: vec![
                item(
                    "⛵",
                    "السفن الشراعية",
                    "طور البحارة المسلمون الشراع المثلث الذي يسمح بالإبحار عكس اتجاه الريح، فقطعوا به المحيطات.",
                ),
                item(
                    "🐪",
                    "طرق القوافل",
                    "شبكة من الدروب والخانات تمتد آلاف الأميال، تنقل البضائع وتؤمن الحجاج والتجار والرحالة.",
                ),
                item(
                    "🧭",
                    "علم الملاحة",
                    "ألف أحمد بن ماجد في فنون البحر كتبًا صارت عمدة الربابنة في المحيط الهندي لقرون.",
                ),
            ],
        },
    ]
}

fn build_prophets() -> Vec<Prophet> {
    fn prophet(id: u32, name: &str, period: &str, icon: &str, description: &str, details: &str) -> Prophet {
        Prophet {
            id,
            arabic_name: name.to_string(),
            period: period.to_string(),
            icon: icon.to_string(),
            description: description.to_string(),
            details: details.to_string(),
        }
    }

    vec![
        prophet(
            1,
            "آدم عليه السلام",
            "بداية الخليقة",
            "🌱",
            "أبو البشر وأول الأنبياء، خلقه الله بيده وعلمه الأسماء كلها.",
            "خلق الله آدم عليه السلام من تراب ونفخ فيه من روحه وأسجد له ملائكته، وعلمه الأسماء كلها ثم أهبطه إلى الأرض ليكون فيها خليفة، فكان أول الأنبياء وأبا البشر جميعًا.",
        ),
        prophet(
            2,
            "نوح عليه السلام",
            "عصر الطوفان",
            "⛵",
            "أول أولي العزم من الرسل، دعا قومه ألف سنة إلا خمسين عامًا.",
            "أرسل الله نوحًا عليه السلام إلى قوم عبدوا الأصنام، فلبث فيهم يدعوهم سرًا وجهارًا قرونًا طويلة، ثم أمره الله بصنع السفينة فحمل فيها من كل زوجين اثنين ونجا ومن آمن معه من الطوفان.",
        ),
        prophet(
            3,
            "إبراهيم عليه السلام",
            "نحو القرن التاسع عشر قبل الميلاد",
            "🕋",
            "خليل الرحمن وأبو الأنبياء، رفع قواعد البيت الحرام.",
            "حطم إبراهيم عليه السلام أصنام قومه فألقوه في النار فجعلها الله بردًا وسلامًا، وهاجر في سبيل ربه، ورفع مع ابنه إسماعيل قواعد البيت الحرام بمكة، ومن ذريته جاء كثير من الأنبياء.",
        ),
        prophet(
            4,
            "يوسف عليه السلام",
            "نحو القرن السابع عشر قبل الميلاد",
            "🌙",
            "صاحب الرؤيا الصادقة الذي مكن الله له في أرض مصر.",
            "ابتلي يوسف عليه السلام بكيد إخوته وظلمة الجب والسجن، فصبر وأحسن، حتى مكن الله له في أرض مصر وجعله على خزائنها، وجمع شمله بأبويه وإخوته، وقصته أحسن القصص في القرآن الكريم.",
        ),
        prophet(
            5,
            "موسى عليه السلام",
            "نحو القرن الثالث عشر قبل الميلاد",
            "📜",
            "كليم الله، أنزلت عليه التوراة وأنجى الله به بني إسرائيل.",
            "أرسل الله موسى عليه السلام إلى فرعون بآيات بينات، فلما كذب وطغى أنجى الله موسى وقومه وفلق لهم البحر، وكلمه ربه عند الطور وأنزل عليه التوراة فيها هدى ونور.",
        ),
        prophet(
            6,
            "داود عليه السلام",
            "نحو القرن العاشر قبل الميلاد",
            "👑",
            "النبي الملك، آتاه الله الزبور وألان له الحديد.",
            "جمع الله لداود عليه السلام النبوة والملك، وآتاه الزبور وعلمه صنعة الدروع وألان له الحديد، وسخر معه الجبال والطير يسبحن بالعشي والإشراق، وكان أوابًا كثير الذكر.",
        ),
        prophet(
            7,
            "عيسى عليه السلام",
            "القرن الأول الميلادي",
            "🕊",
            "كلمة الله وروح منه، أيد بالمعجزات وأنزل عليه الإنجيل.",
            "ولد عيسى عليه السلام من غير أب آية من الله، وكلم الناس في المهد، وأبرأ الأكمه والأبرص وأحيا الموتى بإذن الله، وأنزل عليه الإنجيل، ورفعه الله إليه حين أراد قومه قتله.",
        ),
        prophet(
            8,
            "محمد صلى الله عليه وسلم",
            "571 – 632 م",
            "🕌",
            "خاتم النبيين وسيد المرسلين، أرسل رحمة للعالمين.",
            "ولد محمد صلى الله عليه وسلم بمكة ونزل عليه الوحي في غار حراء وعمره أربعون سنة، فدعا إلى التوحيد ثلاثًا وعشرين سنة، وهاجر إلى المدينة وأقام دولة الإسلام، وأنزل عليه القرآن الكريم معجزة خالدة، وهو خاتم الأنبياء والمرسلين.",
        ),
    ]
}

fn build_manuscripts() -> Vec<Manuscript> {
    fn manuscript(
        id: u32,
        title: &str,
        author: &str,
        period: &str,
        category: &str,
        category_color: CategoryColor,
        description: &str,
        details: &str,
    ) -> Manuscript {
        Manuscript {
            id,
            title: title.to_string(),
            author: author.to_string(),
            period: period.to_string(),
            category: category.to_string(),
            category_color,
            description: description.to_string(),
            details: details.to_string(),
        }
    }

    vec![
        manuscript(
            1,
            "كتاب الجبر والمقابلة",
            "محمد بن موسى الخوارزمي",
            "القرن الثالث الهجري / التاسع الميلادي",
            "الرياضيات",
            CategoryColor::Emerald,
            "الكتاب الذي أسس علم الجبر وأعطاه اسمه الذي يعرف به في كل لغات العالم.",
            "وضع الخوارزمي في هذا الكتاب أصول علم الجبر علمًا مستقلًا، وقدم طرقًا منهجية لحل المعادلات من الدرجتين الأولى والثانية، وترجم إلى اللاتينية فظل مرجع أوروبا الأول في الرياضيات قرونًا، ومن اسمه اشتقت كلمة الخوارزمية.",
        ),
        manuscript(
            2,
            "القانون في الطب",
            "ابن سينا",
            "القرن الخامس الهجري / الحادي عشر الميلادي",
            "الطب",
            CategoryColor::Blue,
            "الموسوعة الطبية التي درست في جامعات أوروبا أكثر من ستمائة عام.",
            "جمع ابن سينا في القانون خلاصة الطب اليوناني والإسلامي ورتبها ترتيبًا منطقيًا محكمًا في خمسة كتب، تناول فيها وظائف الأعضاء والأمراض والأدوية المفردة والمركبة، وظل الكتاب يدرس في أوروبا حتى القرن السابع عشر.",
        ),
        manuscript(
            3,
            "الحاوي في الطب",
            "أبو بكر الرازي",
            "القرن الرابع الهجري / العاشر الميلادي",
            "الطب",
            CategoryColor::Blue,
            "أضخم موسوعة سريرية في الطب القديم، جمعت مشاهدات الرازي وتجاربه.",
            "الحاوي مذكرات الرازي السريرية جمعت بعد وفاته في عشرات المجلدات، دون فيها مشاهداته الدقيقة للمرضى وتجاربه في العلاج، وهو أول من فرق بين الجدري والحصبة وصفًا علميًا دقيقًا.",
        ),
        manuscript(
            4,
            "كتاب صور الكواكب الثابتة",
            "عبد الرحمن الصوفي",
            "القرن الرابع الهجري / العاشر الميلادي",
            "الفلك",
            CategoryColor::Amber,
            "أدق أطلس نجمي في العصور الوسطى، برسوم للكوكبات ومقادير النجوم.",
            "رصد الصوفي النجوم رصدًا مباشرًا وصحح مواضعها ومقاديرها التي وردت عند بطليموس، ورسم لكل كوكبة صورتين كما ترى في السماء وكما ترى على الكرة، وسجل أول وصف معروف لمجرة المرأة المسلسلة.",
        ),
        manuscript(
            5,
            "مقدمة ابن خلدون",
            "عبد الرحمن بن خلدون",
            "القرن الثامن الهجري / الرابع عشر الميلادي",
            "التاريخ",
            CategoryColor::Purple,
            "الكتاب الذي أسس علم العمران البشري وفلسفة التاريخ.",
            "افتتح ابن خلدون بها كتابه العبر فوضع علمًا جديدًا سماه علم العمران، درس فيه قيام الدول وسقوطها وأطوار المجتمعات وأثر البيئة والاقتصاد فيها، ويعد بها مؤسس علم الاجتماع قبل أوروبا بقرون.",
        ),
        manuscript(
            6,
            "كليلة ودمنة",
            "عبد الله بن المقفع",
            "القرن الثاني الهجري / الثامن الميلادي",
            "الأدب",
            CategoryColor::Rose,
            "حكايات على ألسنة الحيوان تحمل حكمة الملوك وسياسة الرعية.",
            "نقل ابن المقفع الكتاب إلى العربية بأسلوب بليغ جعل النسخة العربية أصلًا ترجمت عنه لغات العالم، وهو حكايات رمزية على ألسنة الحيوان في الحكمة وسياسة الملك وعشرة الناس، وتعد مخطوطاته المصورة من أجمل ما زينه الفنانون المسلمون.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_populated() {
        let catalog = Catalog::get();
        assert!(!catalog.rooms.is_empty());
        assert!(!catalog.prophets.is_empty());
        assert!(!catalog.manuscripts.is_empty());
        assert!(catalog.rooms.iter().all(|r| !r.items.is_empty()));
    }

    #[test]
    fn ids_are_unique_and_resolvable() {
        let catalog = Catalog::get();
        for room in &catalog.rooms {
            assert_eq!(catalog.room(room.id).map(|r| r.id), Some(room.id));
        }
        for prophet in &catalog.prophets {
            assert_eq!(catalog.prophet(prophet.id).map(|p| p.id), Some(prophet.id));
        }
        let mut ids: Vec<u32> = catalog.manuscripts.iter().map(|m| m.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.manuscripts.len());
    }

    #[test]
    fn manuscripts_in_one_category_share_a_color() {
        let catalog = Catalog::get();
        for a in &catalog.manuscripts {
            for b in &catalog.manuscripts {
                if a.category == b.category {
                    assert_eq!(a.category_color, b.category_color);
                }
            }
        }
    }

    #[test]
    fn manuscript_narration_composes_title_author_details() {
        let catalog = Catalog::get();
        let manuscript = &catalog.manuscripts[0];
        let text = manuscript.narration_text();
        assert!(text.starts_with(&manuscript.title));
        assert!(text.contains("من تأليف"));
        assert!(text.contains(&manuscript.author));
        assert!(text.ends_with(&manuscript.details));
    }

    #[test]
    fn catalog_round_trips_through_json() {
        let catalog = Catalog::get();
        let json = serde_json::to_string(catalog).unwrap();
        let back: Catalog = serde_json::from_str(&json).unwrap();
        assert_eq!(&back, catalog);
    }
}
