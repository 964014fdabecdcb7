mod tests_member;
