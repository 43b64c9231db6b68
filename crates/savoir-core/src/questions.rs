/// One quiz prompt and its expected free-text answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Question {
    pub question: &'static str,
    pub answer: &'static str,
}

const fn q(question: &'static str, answer: &'static str) -> Question {
    Question { question, answer }
}

/// Geography question bank shown by the quiz view, in display order.
pub static QUESTIONS: &[Question] = &[
    q("Quelle est la capitale de la France ?", "Paris"),
    q("Quelle est la capitale de l'Espagne ?", "Madrid"),
    q("Quelle est la capitale de l'Italie ?", "Rome"),
    q("Quelle est la capitale de l'Allemagne ?", "Berlin"),
    q("Quelle est la capitale du Japon ?", "Tokyo"),
    q("Quelle est la capitale du Canada ?", "Ottawa"),
    q("Quelle est la capitale de l'Australie ?", "Canberra"),
    q("Quelle est la plus grande ville du Brésil ?", "São Paulo"),
    q("Quel est le plus long fleuve de France ?", "La Loire"),
    q("Sur quel continent se trouve l'Égypte ?", "Afrique"),
    q("Quel océan borde la côte ouest de la France ?", "Atlantique"),
    q("Quelle est la capitale du Sénégal ?", "Dakar"),
];
