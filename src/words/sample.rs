use super::WordList;

/// The starter list shown when the page first loads
pub fn sample_word_list() -> WordList {
    [
        ("класс", "описание того, как должен работать объект"),
        (
            "объект",
            "часть программы, которая, в теории, должна уметь работать самостоятельно",
        ),
        ("функция", "блок кода, выполняющий определенную задачу"),
        ("алгоритм", "последовательность шагов для решения задачи"),
    ]
    .into_iter()
    .collect()
}
