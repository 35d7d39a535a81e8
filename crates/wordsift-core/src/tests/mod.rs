mod corpus_tests;
