/// Single-line input owned by a form. Read, clear or pre-fill it directly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormInput {
    label: String,
    text: String,
}

impl FormInput {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn get(&self) -> &str {
        &self.text
    }

    pub fn set(&mut self, value: impl Into<String>) {
        self.text = value.into();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }
}

/// Ordered label to input mapping, one entry per field label.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    inputs: Vec<FormInput>,
    // Input index for each label as originally given, repeats included.
    slots: Vec<usize>,
}

impl FormState {
    pub fn build<S: AsRef<str>>(labels: &[S]) -> Self {
        let mut inputs: Vec<FormInput> = Vec::with_capacity(labels.len());
        let mut slots = Vec::with_capacity(labels.len());
        for label in labels {
            let label = label.as_ref();
            // Repeated labels map to the same input.
            if let Some(existing) = inputs.iter().position(|i| i.label == label) {
                slots.push(existing);
                continue;
            }
            slots.push(inputs.len());
            inputs.push(FormInput {
                label: label.to_string(),
                text: String::new(),
            });
        }
        Self { inputs, slots }
    }

    pub fn labels(&self) -> Vec<&str> {
        self.inputs.iter().map(|i| i.label.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    pub fn input(&self, label: &str) -> Option<&FormInput> {
        self.inputs.iter().find(|i| i.label == label)
    }

    pub fn input_mut(&mut self, label: &str) -> Option<&mut FormInput> {
        self.inputs.iter_mut().find(|i| i.label == label)
    }

    pub fn inputs_mut(&mut self) -> impl Iterator<Item = &mut FormInput> {
        self.inputs.iter_mut()
    }

    /// Pre-fill inputs by the position of their label in the list given to
    /// [`FormState::build`]. For a repeated label the last value wins;
    /// missing values leave the input empty.
    pub fn prefill<S: AsRef<str>>(&mut self, values: &[S]) {
        self.clear_all();
        for (&slot, value) in self.slots.iter().zip(values) {
            self.inputs[slot].set(value.as_ref());
        }
    }

    pub fn clear_all(&mut self) {
        for input in &mut self.inputs {
            input.clear();
        }
    }

    /// Snapshot of every input, trimmed.
    pub fn values(&self) -> FieldValues {
        FieldValues(
            self.inputs
                .iter()
                .map(|i| (i.label.clone(), i.text.trim().to_string()))
                .collect(),
        )
    }
}

/// Trimmed form values keyed by label, in form order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldValues(Vec<(String, String)>);

impl FieldValues {
    pub fn get(&self, label: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(l, v)| (l.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<L: Into<String>, V: Into<String>> FromIterator<(L, V)> for FieldValues {
    fn from_iter<T: IntoIterator<Item = (L, V)>>(iter: T) -> Self {
        FieldValues(iter.into_iter().map(|(l, v)| (l.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_keeps_label_order() {
        let form = FormState::build(&["A", "B"]);
        assert_eq!(form.labels(), vec!["A", "B"]);
        assert_eq!(form.len(), 2);
    }

    #[test]
    fn inputs_are_independent() {
        let mut form = FormState::build(&["A", "B"]);
        form.input_mut("A").unwrap().set("one");
        assert_eq!(form.input("A").unwrap().get(), "one");
        assert_eq!(form.input("B").unwrap().get(), "");

        form.input_mut("B").unwrap().set("two");
        form.input_mut("A").unwrap().clear();
        assert_eq!(form.input("A").unwrap().get(), "");
        assert_eq!(form.input("B").unwrap().get(), "two");
    }

    #[test]
    fn values_are_trimmed() {
        let mut form = FormState::build(&["Code", "Email"]);
        form.input_mut("Code").unwrap().set("  D1 ");
        form.input_mut("Email").unwrap().set("\tx@y.z\n");
        let values = form.values();
        assert_eq!(values.get("Code"), Some("D1"));
        assert_eq!(values.get("Email"), Some("x@y.z"));
        // the inputs themselves are untouched
        assert_eq!(form.input("Code").unwrap().get(), "  D1 ");
    }

    #[test]
    fn prefill_is_positional() {
        let mut form = FormState::build(&["A", "B", "C"]);
        form.prefill(&["1", "2"]);
        assert_eq!(form.input("A").unwrap().get(), "1");
        assert_eq!(form.input("B").unwrap().get(), "2");
        assert_eq!(form.input("C").unwrap().get(), "");
    }

    #[test]
    fn prefill_follows_original_positions_with_repeated_labels() {
        let mut form = FormState::build(&["A", "A", "B"]);
        assert_eq!(form.labels(), vec!["A", "B"]);
        form.prefill(&["1", "2", "3"]);
        assert_eq!(form.input("A").unwrap().get(), "2");
        assert_eq!(form.input("B").unwrap().get(), "3");
    }
}
